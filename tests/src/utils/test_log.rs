use near_sdk::{
    serde::Deserialize,
    serde_json::{self, Value},
    test_utils::get_logs,
};

const EVENT_JSON_PREFIX: &str = "EVENT_JSON:";

#[derive(Debug, Deserialize)]
#[serde(crate = "::near_sdk::serde")]
pub struct EventLog {
    pub standard: String,
    pub version: String,
    pub event: String,
    pub data: Value,
}

/// Logs of the last call made in the mocked environment
#[derive(Debug)]
pub struct TestLog {
    logs: Vec<String>,
}

impl TestLog {
    pub fn capture() -> Self {
        Self { logs: get_logs() }
    }

    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    /// NEP-297 events of given `standard`, in order of emission
    pub fn events(&self, standard: &str) -> Vec<EventLog> {
        self.logs
            .iter()
            .filter_map(|log| log.strip_prefix(EVENT_JSON_PREFIX))
            .map(|json| serde_json::from_str::<EventLog>(json).unwrap())
            .filter(|event| event.standard == standard)
            .collect()
    }
}
