use super::{MethodSignatureInfo, ParameterInfo};

const DOUBLE: &str = "double";
const DOUBLE_VEC: &str = "doubleVec";

const VECTOR: ParameterInfo = ParameterInfo {
    name: "v",
    display_text: "v: doubleVecList",
    description: "Values to reduce. Vectors and scalars are flattened together.",
};

const VECTOR_2: ParameterInfo = ParameterInfo {
    name: "v2",
    display_text: "v2: doubleVecList",
    description: "Further values, flattened together with the first argument.",
};

const BASE_VALUE: ParameterInfo = ParameterInfo {
    name: "x",
    display_text: "x: doubleVecList",
    description: "Value or vector to transform element-wise.",
};

const LOG_BASE: ParameterInfo = ParameterInfo {
    name: "base",
    display_text: "base: double",
    description: "Logarithm base.",
};

/// A reducer over one list, or over the concatenation of two.
macro_rules! reducer {
    ($name:literal, $what:literal) => {
        (
            $name,
            &[
                MethodSignatureInfo {
                    name: $name,
                    description: $what,
                    parameters: &[VECTOR],
                    return_type: DOUBLE,
                },
                MethodSignatureInfo {
                    name: $name,
                    description: $what,
                    parameters: &[VECTOR, VECTOR_2],
                    return_type: DOUBLE,
                },
            ],
        )
    };
}

macro_rules! logarithm {
    ($name:literal, $what:literal) => {
        (
            $name,
            &[
                MethodSignatureInfo {
                    name: $name,
                    description: $what,
                    parameters: &[BASE_VALUE],
                    return_type: DOUBLE_VEC,
                },
                MethodSignatureInfo {
                    name: $name,
                    description: $what,
                    parameters: &[BASE_VALUE, LOG_BASE],
                    return_type: DOUBLE_VEC,
                },
            ],
        )
    };
}

pub(super) const ENTRIES: super::SignatureEntries = &[
    reducer!("avg", "Returns the average of all values."),
    reducer!("len", "Returns the number of values."),
    logarithm!("lg", "Returns the base-2 logarithm."),
    logarithm!("ln", "Returns the natural logarithm."),
    logarithm!("log", "Returns the logarithm, base 10 unless a base is given."),
    reducer!("max", "Returns the maximum value."),
    reducer!("min", "Returns the minimum value."),
    reducer!("norm", "Returns the two-norm of the vector."),
    (
        "percentile",
        &[MethodSignatureInfo {
            name: "percentile",
            description: "Returns the p-th percentile of the values.",
            parameters: &[
                VECTOR,
                ParameterInfo {
                    name: "p",
                    display_text: "p: double",
                    description: "Percentile between 0 and 100.",
                },
            ],
            return_type: DOUBLE,
        }],
    ),
    (
        "rand",
        &[MethodSignatureInfo {
            name: "rand",
            description: "Returns a random value between 0.0 and 1.0.",
            parameters: &[],
            return_type: DOUBLE,
        }],
    ),
    reducer!("range", "Returns the difference between the maximum and minimum values."),
    reducer!("std", "Returns the sample standard deviation of the values."),
    (
        "stop",
        &[MethodSignatureInfo {
            name: "stop",
            description: "Stops evaluation of the formula.",
            parameters: &[],
            return_type: "void",
        }],
    ),
    reducer!("sum", "Returns the sum of all values."),
    (
        "time",
        &[
            MethodSignatureInfo {
                name: "time",
                description: "Returns the current time.",
                parameters: &[],
                return_type: "timestamp",
            },
            MethodSignatureInfo {
                name: "time",
                description: "Parses a date-time string into a timestamp.",
                parameters: &[ParameterInfo {
                    name: "dateTime",
                    display_text: "dateTime: string",
                    description: "Date and time in a standard format.",
                }],
                return_type: "timestamp",
            },
        ],
    ),
    (
        "val",
        &[MethodSignatureInfo {
            name: "val",
            description: "Returns the element at the given position of the vector.",
            parameters: &[
                ParameterInfo {
                    name: "v",
                    display_text: "v: doubleVec",
                    description: "Vector to index.",
                },
                ParameterInfo {
                    name: "i",
                    display_text: "i: double",
                    description: "Zero-based element index.",
                },
            ],
            return_type: DOUBLE,
        }],
    ),
];
