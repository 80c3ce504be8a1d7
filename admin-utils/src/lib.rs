pub mod full_access_keys;
