use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Reachability {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "NOT OK")]
    NotOk,
}

impl From<bool> for Reachability {
    fn from(reachable: bool) -> Self {
        if reachable {
            Reachability::Ok
        } else {
            Reachability::NotOk
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    pub countriesnowapi: Reachability,
    pub restcountriesapi: Reachability,
    pub version: String,
    pub uptime: u64,
}
