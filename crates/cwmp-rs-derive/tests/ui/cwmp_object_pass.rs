use cwmp_rs::CwmpObject;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, CwmpObject)]
#[cwmp(path = "Device.X_EXAMPLE_Widget.{i}.", unique_key = "Alias")]
pub struct Widget {
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub enable: Option<bool>,
    #[serde(rename = "Alias", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub alias: Option<String>,
    #[serde(rename = "Part", default)]
    #[cwmp(object)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize, CwmpObject)]
#[cwmp(path = "Device.X_EXAMPLE_Widget.{i}.Part.{i}.")]
pub struct Part {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub name: Option<String>,
}

fn main() {
    let mut widget = Widget::default().with_enable(true).with_alias("w1");
    assert_eq!(widget.add_part(Part::default()), 1);
    assert!(widget.set_parameter_value("Part.1.Name", "left").is_ok());
    assert_eq!(widget.parts[0].name.as_deref(), Some("left"));
    assert_eq!(Widget::PATH, "Device.X_EXAMPLE_Widget.{i}.");
    assert!(Widget::info().is_multi_instance());
}
