//! Conditional logging macros.
//!
//! When the `tracing` feature is enabled, these re-export `tracing` macros.
//! When disabled, they expand to `()` so the render loop pays nothing and
//! call sites type-check the same in statement or expression position.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        ()
    };
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};

#[cfg(test)]
mod tests {
    use super::{debug, warn};

    fn describe(cluster: Option<&str>) -> usize {
        match cluster {
            Some(name) => name.len(),
            None => {
                debug!("no cluster");
                0
            }
        }
    }

    #[test]
    fn macros_work_as_statements() {
        assert_eq!(describe(Some("wind")), 4);
        assert_eq!(describe(None), 0);
    }

    #[test]
    fn macros_work_in_expression_position() {
        let mut skipped = 0;
        for name in ["wind", "optional"] {
            match name {
                "wind" => warn!(cluster = name, "registered"),
                _ => debug!(cluster = name, "skipped"),
            }
            skipped += 1;
        }
        assert_eq!(skipped, 2);
    }
}
