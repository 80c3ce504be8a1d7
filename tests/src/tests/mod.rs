mod admin;
mod cross_contract;
