// crates/cwmp-rs/src/object.rs

//! The `CwmpObject` trait shared by every model type, and the visitor used to
//! walk populated object trees.

use crate::error::CwmpError;
use crate::meta::{ObjectInfo, ParameterInfo, ParameterKind};
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::{debug, trace, warn};

/// A parameter value addressed by its full instance path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterValue {
    /// Full path, e.g. `Device.DHCPv4.Server.Pool.1.Enable`.
    pub name: String,
    pub value: String,
    pub kind: ParameterKind,
}

/// Receives objects and parameters while an object tree is walked.
pub trait ParameterVisitor {
    /// Called for every object instance before its parameters.
    fn visit_object(&mut self, path: &str, info: &'static ObjectInfo) {
        let _ = (path, info);
    }

    /// Called for every parameter. `value` is `None` when the field is unset.
    fn visit_parameter(&mut self, path: &str, info: &'static ParameterInfo, value: Option<String>);
}

/// Common behaviour of all CWMP model types. Implemented by
/// `#[derive(CwmpObject)]`.
pub trait CwmpObject {
    /// Schema of this object type.
    fn info() -> &'static ObjectInfo
    where
        Self: Sized;

    /// Walks this instance and its populated children. `path` is the
    /// instance path of `self` and must end with a dot.
    ///
    /// Table entries are numbered by their 1-based position in the
    /// collection. Hidden parameters report an empty string.
    fn visit(&self, path: &str, visitor: &mut dyn ParameterVisitor);

    /// Sets a parameter addressed relative to this object (`Enable`,
    /// `Stats.BytesSent`, `StaticAddress.2.Chaddr`).
    ///
    /// Missing single child objects are created on the way. Table
    /// instances must already exist. Read-only parameters are rejected.
    fn set_parameter_value(&mut self, path: &str, value: &str) -> Result<(), CwmpError>;

    /// Collects every parameter that currently has a value.
    fn parameter_values(&self, path: &str) -> Vec<ParameterValue> {
        let mut collector = ValueCollector::default();
        self.visit(path, &mut collector);
        trace!("collected {} parameter values below {}", collector.values.len(), path);
        collector.values
    }

    /// Reads one parameter by its full path. `path` is the instance path of
    /// `self`.
    fn parameter_value(&self, path: &str, parameter: &str) -> Option<String> {
        let mut finder = ValueFinder {
            target: parameter,
            found: None,
        };
        self.visit(path, &mut finder);
        finder.found
    }

    /// Sets one parameter by its full path. `path` is the instance path of
    /// `self` and must prefix `parameter`.
    fn set_parameter_value_at(
        &mut self,
        path: &str,
        parameter: &str,
        value: &str,
    ) -> Result<(), CwmpError> {
        let relative = parameter
            .strip_prefix(path)
            .filter(|rest| !rest.is_empty())
            .ok_or_else(|| CwmpError::InvalidPath {
                path: parameter.to_string(),
                reason: "parameter is not below this object",
            })?;
        debug!("setting {} = '{}'", parameter, value);
        self.set_parameter_value(relative, value).inspect_err(|e| {
            warn!("rejected write of {}: {}", parameter, e);
        })
    }
}

#[derive(Default)]
struct ValueCollector {
    values: Vec<ParameterValue>,
}

impl ParameterVisitor for ValueCollector {
    fn visit_parameter(&mut self, path: &str, info: &'static ParameterInfo, value: Option<String>) {
        if let Some(value) = value {
            self.values.push(ParameterValue {
                name: path.to_string(),
                value,
                kind: info.kind,
            });
        }
    }
}

struct ValueFinder<'a> {
    target: &'a str,
    found: Option<String>,
}

impl ParameterVisitor for ValueFinder<'_> {
    fn visit_parameter(&mut self, path: &str, _info: &'static ParameterInfo, value: Option<String>) {
        if self.found.is_none() && path == self.target {
            self.found = value;
        }
    }
}
