//! Host-facing operations.
//!
//! A host application calls methods by name with loosely typed arguments.
//! [`Value`] is the closed set of argument kinds it can pass, and every
//! method matches on it exhaustively; anything else is
//! [`BoxAssistError::UnsupportedArgumentType`].
//!
//! | method      | display name | arguments              | returns            |
//! |-------------|--------------|------------------------|--------------------|
//! | `Calculate` | `Вычислить`  | bytes, 32-bit int sum  | comma-joined indices |
//! | `Test`      | `Тест`       | bytes                  | comma-joined values  |

use crate::codec::decode;
use crate::error::{BoxAssistError, Result};
use crate::format::join_decimal;
use crate::problems::subset_sum::solve_with_limits;
use crate::utils::{index_bound, TableLimits};

/// Argument or return value exchanged with the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Bytes(Vec<u8>),
    Int(i32),
    Str(String),
}

impl Value {
    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bytes(_) => "bytes",
            Value::Int(_) => "int",
            Value::Str(_) => "string",
        }
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

/// Methods registered with the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Calculate,
    Test,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Calculate, Method::Test];

    pub fn name(self) -> &'static str {
        match self {
            Method::Calculate => "Calculate",
            Method::Test => "Test",
        }
    }

    /// Localized name shown in the host's UI.
    pub fn display_name(self) -> &'static str {
        match self {
            Method::Calculate => "Вычислить",
            Method::Test => "Тест",
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Method::Calculate => 2,
            Method::Test => 1,
        }
    }

    /// Find a method by either of its names, ignoring case.
    pub fn lookup(name: &str) -> Option<Method> {
        let wanted = name.to_lowercase();
        Self::ALL.into_iter().find(|m| {
            m.name().to_lowercase() == wanted || m.display_name().to_lowercase() == wanted
        })
    }
}

/// The operation facade.
#[derive(Clone, Debug)]
pub struct BoxAssist {
    limits: TableLimits,
}

impl Default for BoxAssist {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxAssist {
    pub fn new() -> Self {
        Self::with_limits(TableLimits::default())
    }

    /// Facade whose solver runs reject tables larger than `max_table_cells`.
    pub fn with_max_table_cells(max_table_cells: usize) -> Self {
        Self::with_limits(TableLimits {
            max_table_cells,
            ..TableLimits::default()
        })
    }

    pub fn with_limits(limits: TableLimits) -> Self {
        Self { limits }
    }

    pub fn extension_name() -> &'static str {
        "BoxAssist"
    }

    pub fn max_table_cells(&self) -> usize {
        self.limits.max_table_cells
    }

    pub fn limits(&self) -> TableLimits {
        self.limits
    }

    /// Dispatch by host-visible name.
    pub fn call_by_name(&self, name: &str, args: &[Value]) -> Result<Value> {
        let method =
            Method::lookup(name).ok_or_else(|| BoxAssistError::UnknownMethod(name.to_string()))?;
        self.call(method, args)
    }

    pub fn call(&self, method: Method, args: &[Value]) -> Result<Value> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("call", method = method.name(), args = args.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let out = match (method, args) {
            (Method::Calculate, [input, sum]) => self.calculate(input, sum),
            (Method::Test, [input]) => self.test(input),
            _ => Err(BoxAssistError::UnsupportedArgumentType {
                method: method.name(),
            }),
        };

        #[cfg(feature = "tracing")]
        {
            if let Err(err) = &out {
                tracing::debug!(%err, "call rejected");
            }
        }
        out.map(Value::Str)
    }

    /// `Calculate`: `(bytes, int)` arguments.
    pub fn calculate(&self, input: &Value, sum: &Value) -> Result<String> {
        match (input, sum) {
            (Value::Bytes(bytes), Value::Int(sum)) => self.compute(bytes, *sum),
            (_, _) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    input = input.kind(),
                    sum = sum.kind(),
                    "unsupported argument types"
                );
                Err(BoxAssistError::UnsupportedArgumentType {
                    method: Method::Calculate.name(),
                })
            }
        }
    }

    /// `Test`: `(bytes)` argument.
    pub fn test(&self, input: &Value) -> Result<String> {
        match input {
            Value::Bytes(bytes) => Ok(diagnostic_echo(bytes)),
            Value::Int(_) | Value::Str(_) => Err(BoxAssistError::UnsupportedArgumentType {
                method: Method::Test.name(),
            }),
        }
    }

    /// Decode `input`, pick the subset and render its indices.
    ///
    /// If `target_sum` covers the total of all weights the whole index range
    /// is returned without running the solver; this includes a target
    /// exactly equal to the total, and the empty weight set for any
    /// non-negative target.
    pub fn compute(&self, input: &[u8], target_sum: i32) -> Result<String> {
        let weights = decode(input);
        let end = index_bound(weights.len())?;
        let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();

        if target_sum >= 0 && target_sum as u64 >= total {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                weights = weights.len(),
                total,
                target_sum,
                "target covers the whole set"
            );
            let all: Vec<u32> = (0..end).collect();
            return Ok(join_decimal(&all));
        }

        let indices = solve_with_limits(
            &weights,
            weights.len(),
            i64::from(target_sum),
            self.limits,
        )?;
        Ok(join_decimal(&indices))
    }
}

/// Decode then render: shows the caller what the codec read from `input`.
pub fn diagnostic_echo(input: &[u8]) -> String {
    join_decimal(&decode(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn pack(values: &[u32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_le_bytes()).collect()
    }

    #[test]
    fn lookup_by_either_name() {
        assert_eq!(Method::lookup("Calculate"), Some(Method::Calculate));
        assert_eq!(Method::lookup("вычислить"), Some(Method::Calculate));
        assert_eq!(Method::lookup("TEST"), Some(Method::Test));
        assert_eq!(Method::lookup("Тест"), Some(Method::Test));
        assert_eq!(Method::lookup("Solve"), None);
    }

    #[test]
    fn compute_runs_solver_below_total() {
        let ba = BoxAssist::new();
        let input = pack(&[3, 34, 4, 12, 5, 2]);
        assert_eq!(ba.compute(&input, 9).unwrap(), "0,2,5");
    }

    #[test]
    fn compute_short_circuits_at_total() {
        let ba = BoxAssist::new();
        let input = pack(&[3, 4, 5]);
        assert_eq!(ba.compute(&input, 12).unwrap(), "0,1,2");
        assert_eq!(ba.compute(&input, 1000).unwrap(), "0,1,2");
        assert_eq!(ba.compute(&input, 11).unwrap(), "1,2");
    }

    #[test]
    fn short_circuit_skips_the_ceiling() {
        let ba = BoxAssist::with_max_table_cells(0);
        assert_eq!(ba.compute(&pack(&[1, 2]), 3).unwrap(), "0,1");
        let err = ba.compute(&pack(&[1, 2]), 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceLimitExceeded);
    }

    #[test]
    fn wide_target_hits_the_column_ceiling() {
        // the total exceeds the target, so the solver runs and is refused
        let ba = BoxAssist::new();
        let input = pack(&[u32::MAX]);
        let err = ba.compute(&input, (1 << 27) - 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceLimitExceeded);

        let ba = BoxAssist::with_limits(TableLimits {
            max_table_cells: usize::MAX,
            max_frontier_width: 4,
        });
        assert_eq!(ba.compute(&pack(&[1, 2, 9]), 3).unwrap(), "0,1");
        let err = ba.compute(&pack(&[1, 2, 9]), 4).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceLimitExceeded);
    }

    #[test]
    fn empty_input() {
        let ba = BoxAssist::new();
        assert_eq!(ba.compute(&[], 0).unwrap(), "");
        assert_eq!(ba.compute(&[1, 2, 3], 7).unwrap(), "");
        assert_eq!(ba.compute(&[], -1).unwrap(), "");
    }

    #[test]
    fn negative_sum_with_weights_is_invalid() {
        let err = BoxAssist::new().compute(&pack(&[1]), -1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn total_does_not_wrap() {
        // u32 total would wrap to 1 and wrongly short-circuit
        let ba = BoxAssist::new();
        let input = pack(&[u32::MAX, 2]);
        assert_eq!(ba.compute(&input, 2).unwrap(), "1");
    }

    #[test]
    fn argument_type_mismatch() {
        let ba = BoxAssist::new();
        let cases = [
            (Value::Int(1), Value::Int(1)),
            (Value::Bytes(vec![]), Value::Str("1".into())),
            (Value::Str("x".into()), Value::Int(1)),
        ];
        for (a, b) in cases {
            let err = ba.calculate(&a, &b).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedArgumentType);
        }
        let err = ba.test(&Value::Int(5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedArgumentType);
    }

    #[test]
    fn call_checks_arity() {
        let ba = BoxAssist::new();
        let err = ba
            .call(Method::Calculate, &[Value::Bytes(vec![])])
            .unwrap_err();
        assert_eq!(err, BoxAssistError::UnsupportedArgumentType { method: "Calculate" });
        let err = ba.call(Method::Test, &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedArgumentType);
    }

    #[test]
    fn call_by_name_round_trip() {
        let ba = BoxAssist::new();
        let out = ba
            .call_by_name("Тест", &[pack(&[7, 0, 65536]).into()])
            .unwrap();
        assert_eq!(out, Value::Str("7,0,65536".into()));

        let err = ba.call_by_name("Nope", &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownMethod);
    }
}
