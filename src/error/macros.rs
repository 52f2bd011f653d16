//! Error macros for pathgraph

/// Macro for returning an invalid value error
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for returning an unsupported value error
#[macro_export]
macro_rules! bail_unsupported {
    ($context:expr, $value:expr, $supported:expr) => {
        return Err($crate::error::GraphError::unsupported(
            $context, $value, $supported,
        ))
    };
}
