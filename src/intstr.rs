use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::error::Error;

/// A bound given either as an absolute number of pods or as a percentage of the desired replicas.
///
/// On the wire this is the usual int-or-string: `5` or `"10%"`. Strings that are not a
/// percentage are rejected when decoding rather than reinterpreted as counts. Scaling a
/// percentage to a pod count is left to the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntOrString", into = "IntOrString")]
pub enum IntOrPercent {
    Count(i32),
    Percent(u32),
}

impl TryFrom<IntOrString> for IntOrPercent {
    type Error = Error;

    fn try_from(value: IntOrString) -> Result<Self, Self::Error> {
        match value {
            IntOrString::Int(i) => Ok(IntOrPercent::Count(i)),
            IntOrString::String(s) => s
                .strip_suffix('%')
                .filter(|p| is_canonical_digits(p))
                .and_then(|p| p.parse::<u32>().ok())
                .map(IntOrPercent::Percent)
                .ok_or(Error::InvalidIntOrPercent(s)),
        }
    }
}

// Plain decimal without sign or leading zeros, so decoding never rewrites the text.
fn is_canonical_digits(p: &str) -> bool {
    !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()) && (p == "0" || !p.starts_with('0'))
}

impl From<IntOrPercent> for IntOrString {
    fn from(value: IntOrPercent) -> Self {
        match value {
            IntOrPercent::Count(i) => IntOrString::Int(i),
            IntOrPercent::Percent(p) => IntOrString::String(format!("{}%", p)),
        }
    }
}

impl From<i32> for IntOrPercent {
    fn from(value: i32) -> Self {
        IntOrPercent::Count(value)
    }
}

impl Display for IntOrPercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntOrPercent::Count(i) => write!(f, "{}", i),
            IntOrPercent::Percent(p) => write!(f, "{}%", p),
        }
    }
}

// Same schema as the upstream int-or-string so generated CRDs carry x-kubernetes-int-or-string.
impl JsonSchema for IntOrPercent {
    fn schema_name() -> String {
        IntOrString::schema_name()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        IntOrString::json_schema(gen)
    }
}
