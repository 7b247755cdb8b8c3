use cwmp_rs::CwmpObject;
use serde::Serialize;

#[derive(Serialize, CwmpObject)]
#[cwmp(path = "Device.Widget.")]
pub struct Widget {
    pub enable: Option<bool>,
}

fn main() {}
