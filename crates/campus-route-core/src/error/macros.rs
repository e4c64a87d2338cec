//! Error macros for campus-route

/// Macro for returning an out-of-range vertex error
#[macro_export]
macro_rules! bail_out_of_range {
    ($op:expr, $vertex:expr, $count:expr) => {
        return Err($crate::error::RouteError::vertex_out_of_range(
            $op, $vertex, $count,
        ))
    };
}

/// Macro for returning an invalid map error
#[macro_export]
macro_rules! bail_invalid_map {
    ($reason:expr) => {
        return Err($crate::error::RouteError::invalid_map($reason))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::RouteError::UsageError($msg.to_string()))
    };
}
