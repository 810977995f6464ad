//! Built-in names offered to completion and checked by the rule engine.

/// Built-in variables exposing sample history.
pub const SAMPLING_VARIABLES: &[&str] = &[
    "$CPUPercent",
    "$WallClockSeconds",
    "$MemoryBytes",
    "$DiskBytes",
    "$DiskReadBytes",
    "$DiskWriteBytes",
    "$DiskReadOps",
    "$DiskWriteOps",
    "$NetworkInBytes",
    "$NetworkOutBytes",
    "$SampleNodeCount",
    "$ActiveTasks",
    "$RunningTasks",
    "$PendingTasks",
    "$SucceededTasks",
    "$FailedTasks",
    "$CurrentDedicatedNodes",
    "$CurrentLowPriorityNodes",
    "$UsableNodeCount",
    "$PreemptedNodeCount",
];

/// Service-defined variables a formula assigns to.
pub const SETTABLE_VARIABLES: &[&str] = &[
    "$TargetDedicatedNodes",
    "$TargetLowPriorityNodes",
    DEALLOCATION_OPTION_VARIABLE,
];

pub const TIME_INTERVALS: &[&str] = &[
    "TimeInterval_Zero",
    "TimeInterval_100ns",
    "TimeInterval_Microsecond",
    "TimeInterval_Millisecond",
    "TimeInterval_Second",
    "TimeInterval_Minute",
    "TimeInterval_Hour",
    "TimeInterval_Day",
    "TimeInterval_Week",
    "TimeInterval_Year",
];

/// Values accepted by [`DEALLOCATION_OPTION_VARIABLE`]. Lexed as keywords.
pub const DEALLOCATION_KEYWORDS: &[&str] =
    &["requeue", "terminate", "taskcompletion", "retaineddata"];

/// The one variable whose value must be a deallocation keyword.
pub const DEALLOCATION_OPTION_VARIABLE: &str = "$NodeDeallocationOption";

pub fn is_sampling_variable(name: &str) -> bool {
    SAMPLING_VARIABLES.contains(&name)
}

pub fn is_deallocation_keyword(text: &str) -> bool {
    DEALLOCATION_KEYWORDS.contains(&text)
}
