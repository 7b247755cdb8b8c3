use cwmp_rs::CwmpObject;
use serde::Serialize;

#[derive(Serialize, CwmpObject)]
pub struct Widget {
    #[serde(rename = "Enable")]
    pub enable: Option<bool>,
}

fn main() {}
