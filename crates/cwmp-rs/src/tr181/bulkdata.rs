// crates/cwmp-rs/src/tr181/bulkdata.rs

//! `Device.BulkData.`: periodic bulk reporting of parameter values (TR-157
//! Annex A / TR-232).
//!
//! A [`Profile`] selects parameters through [`ProfileParameter`] references,
//! which may use partial paths or `*` wildcards, and ships the report with
//! the configured protocol and encoding.

use crate::CwmpObject;
use crate::types::DateTime;
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "BulkData", default)]
#[cwmp(path = "Device.BulkData.")]
pub struct BulkData {
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite")]
    pub enable: Option<bool>,
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    #[cwmp(values = "Enabled|Disabled|Error")]
    pub status: Option<String>,
    #[serde(rename = "MinReportingInterval", skip_serializing_if = "Option::is_none")]
    #[cwmp(units = "seconds")]
    pub min_reporting_interval: Option<u32>,
    #[serde(rename = "Protocols", skip_serializing_if = "Option::is_none")]
    #[cwmp(list, values = "Streaming|File|HTTP|UDP|MQTT")]
    pub protocols: Option<String>,
    #[serde(rename = "EncodingTypes", skip_serializing_if = "Option::is_none")]
    #[cwmp(list, values = "XML|XDR|CSV|JSON")]
    pub encoding_types: Option<String>,
    #[serde(rename = "ParameterWildCardSupported", skip_serializing_if = "Option::is_none")]
    pub parameter_wild_card_supported: Option<bool>,
    /// `-1` means no limit.
    #[serde(rename = "MaxNumberOfProfiles", skip_serializing_if = "Option::is_none")]
    #[cwmp(min = -1)]
    pub max_number_of_profiles: Option<i32>,
    #[serde(rename = "MaxNumberOfParameterReferences", skip_serializing_if = "Option::is_none")]
    #[cwmp(min = -1)]
    pub max_number_of_parameter_references: Option<i32>,
    #[serde(rename = "ProfileNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub profile_number_of_entries: Option<u32>,

    #[serde(rename = "Profile", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub profiles: Vec<Profile>,
}

/// One bulk data report definition.
///
/// Changing `Enable` to `true` restarts the reporting interval. The
/// `TimeReference` anchors the interval to an absolute time when set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Profile", default)]
#[cwmp(
    path = "Device.BulkData.Profile.{i}.",
    access = "readWrite",
    num_entries = "ProfileNumberOfEntries",
    enable = "Enable",
    unique_key = "Alias"
)]
pub struct Profile {
    #[serde(rename = "Enable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub enable: Option<bool>,
    #[serde(rename = "Alias", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub alias: Option<String>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 255)]
    pub name: Option<String>,
    /// `-1` retains every failed report, `0` none.
    #[serde(rename = "NumberOfRetainedFailedReports", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = -1, default = "0")]
    pub number_of_retained_failed_reports: Option<i32>,
    #[serde(rename = "Protocol", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "Streaming|File|HTTP|UDP|MQTT")]
    pub protocol: Option<String>,
    #[serde(rename = "EncodingType", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "XML|XDR|CSV|JSON")]
    pub encoding_type: Option<String>,
    #[serde(rename = "ReportingInterval", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1, units = "seconds", default = "86400")]
    pub reporting_interval: Option<u32>,
    #[serde(rename = "TimeReference", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "0001-01-01T00:00:00Z")]
    pub time_reference: Option<DateTime>,
    #[serde(rename = "ParameterNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub parameter_number_of_entries: Option<u32>,

    #[serde(rename = "Parameter", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub parameters: Vec<ProfileParameter>,
    #[serde(rename = "CSV", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub csv: Option<CsvEncoding>,
    #[serde(rename = "JSON", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub json: Option<JsonEncoding>,
    #[serde(rename = "HTTP", skip_serializing_if = "Option::is_none")]
    #[cwmp(object)]
    pub http: Option<Http>,
}

/// A parameter (or partial path / wildcard path) included in a report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "Parameter", default)]
#[cwmp(
    path = "Device.BulkData.Profile.{i}.Parameter.{i}.",
    access = "readWrite",
    num_entries = "ParameterNumberOfEntries"
)]
pub struct ProfileParameter {
    /// Name used for the value in the report. Empty means the full path.
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub name: Option<String>,
    #[serde(rename = "Reference", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "CSV", default)]
#[cwmp(path = "Device.BulkData.Profile.{i}.CSV.")]
pub struct CsvEncoding {
    #[serde(rename = "FieldSeparator", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = ",")]
    pub field_separator: Option<String>,
    #[serde(rename = "RowSeparator", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "&#13;&#10;")]
    pub row_separator: Option<String>,
    #[serde(rename = "EscapeCharacter", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "&quot;")]
    pub escape_character: Option<String>,
    #[serde(rename = "ReportFormat", skip_serializing_if = "Option::is_none")]
    #[cwmp(
        access = "readWrite",
        values = "ParameterPerRow|ParameterPerColumn",
        default = "ParameterPerColumn"
    )]
    pub report_format: Option<String>,
    #[serde(rename = "RowTimestamp", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "Unix-Epoch|ISO-8601|None", default = "Unix-Epoch")]
    pub row_timestamp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "JSON", default)]
#[cwmp(path = "Device.BulkData.Profile.{i}.JSON.")]
pub struct JsonEncoding {
    #[serde(rename = "ReportFormat", skip_serializing_if = "Option::is_none")]
    #[cwmp(
        access = "readWrite",
        values = "ObjectHierarchy|NameValuePair",
        default = "ObjectHierarchy"
    )]
    pub report_format: Option<String>,
    #[serde(rename = "ReportTimestamp", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "Unix-Epoch|ISO-8601|None", default = "Unix-Epoch")]
    pub report_timestamp: Option<String>,
}

/// HTTP transport of a profile's reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "HTTP", default)]
#[cwmp(path = "Device.BulkData.Profile.{i}.HTTP.")]
pub struct Http {
    #[serde(rename = "URL", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 1024)]
    pub url: Option<String>,
    #[serde(rename = "Username", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub username: Option<String>,
    #[serde(rename = "Password", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256, hidden)]
    pub password: Option<String>,
    #[serde(rename = "CompressionsSupported", skip_serializing_if = "Option::is_none")]
    #[cwmp(list, values = "GZIP|Compress|Deflate")]
    pub compressions_supported: Option<String>,
    #[serde(rename = "Compression", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "None")]
    pub compression: Option<String>,
    #[serde(rename = "MethodsSupported", skip_serializing_if = "Option::is_none")]
    #[cwmp(list, values = "POST|PUT")]
    pub methods_supported: Option<String>,
    #[serde(rename = "Method", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", values = "POST|PUT", default = "POST")]
    pub method: Option<String>,
    #[serde(rename = "UseDateHeader", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "true")]
    pub use_date_header: Option<bool>,
    #[serde(rename = "RetryEnable", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub retry_enable: Option<bool>,
    #[serde(rename = "RetryMinimumWaitInterval", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1, max = 65535, default = "5", units = "seconds")]
    pub retry_minimum_wait_interval: Option<u32>,
    #[serde(rename = "RetryIntervalMultiplier", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", min = 1000, max = 65535, default = "2000")]
    pub retry_interval_multiplier: Option<u32>,
    #[serde(rename = "RequestURIParameterNumberOfEntries", skip_serializing_if = "Option::is_none")]
    pub request_uri_parameter_number_of_entries: Option<u32>,
    #[serde(rename = "PersistAcrossReboot", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", default = "false")]
    pub persist_across_reboot: Option<bool>,

    #[serde(rename = "RequestURIParameter", skip_serializing_if = "Vec::is_empty")]
    #[cwmp(object)]
    pub request_uri_parameters: Vec<RequestUriParameter>,
}

/// A query parameter appended to the report URL, taken from a parameter value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, CwmpObject)]
#[serde(rename = "RequestURIParameter", default)]
#[cwmp(
    path = "Device.BulkData.Profile.{i}.HTTP.RequestURIParameter.{i}.",
    access = "readWrite",
    num_entries = "RequestURIParameterNumberOfEntries"
)]
pub struct RequestUriParameter {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 64)]
    pub name: Option<String>,
    #[serde(rename = "Reference", skip_serializing_if = "Option::is_none")]
    #[cwmp(access = "readWrite", max_size = 256)]
    pub reference: Option<String>,
}
