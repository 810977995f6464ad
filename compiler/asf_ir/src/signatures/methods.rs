use super::{MethodSignatureInfo, ParameterInfo};

const START_TIME: ParameterInfo = ParameterInfo {
    name: "startTime",
    display_text: "startTime: timeinterval",
    description: "How far back to start collecting samples.",
};

const END_TIME: ParameterInfo = ParameterInfo {
    name: "endTime",
    display_text: "endTime: timeinterval",
    description: "How far back to stop collecting samples.",
};

const SAMPLE_PERCENT: ParameterInfo = ParameterInfo {
    name: "samplePercent",
    display_text: "samplePercent: double",
    description: "Minimum percentage of samples that must be available.",
};

const COUNT_PARAM: ParameterInfo = ParameterInfo {
    name: "count",
    display_text: "count: double",
    description: "Number of most recent samples to return.",
};

const GET_SAMPLE: &str = "Returns a vector of sample values.";
const GET_SAMPLE_PERCENT: &str =
    "Returns the percentage of samples available in the given time interval.";

pub(super) const ENTRIES: super::SignatureEntries = &[
    (
        "GetSample",
        &[
            MethodSignatureInfo {
                name: "GetSample",
                description: GET_SAMPLE,
                parameters: &[COUNT_PARAM],
                return_type: "doubleVec",
            },
            MethodSignatureInfo {
                name: "GetSample",
                description: GET_SAMPLE,
                parameters: &[START_TIME, END_TIME],
                return_type: "doubleVec",
            },
            MethodSignatureInfo {
                name: "GetSample",
                description: GET_SAMPLE,
                parameters: &[START_TIME, END_TIME, SAMPLE_PERCENT],
                return_type: "doubleVec",
            },
        ],
    ),
    (
        "GetSamplePercent",
        &[
            MethodSignatureInfo {
                name: "GetSamplePercent",
                description: GET_SAMPLE_PERCENT,
                parameters: &[START_TIME],
                return_type: "double",
            },
            MethodSignatureInfo {
                name: "GetSamplePercent",
                description: GET_SAMPLE_PERCENT,
                parameters: &[START_TIME, END_TIME],
                return_type: "double",
            },
        ],
    ),
    (
        "GetSamplePeriod",
        &[MethodSignatureInfo {
            name: "GetSamplePeriod",
            description: "Returns the period of the samples taken.",
            parameters: &[],
            return_type: "timeinterval",
        }],
    ),
    (
        "Count",
        &[MethodSignatureInfo {
            name: "Count",
            description: "Returns the total number of samples in the metric history.",
            parameters: &[],
            return_type: "double",
        }],
    ),
    (
        "HistoryBeginTime",
        &[MethodSignatureInfo {
            name: "HistoryBeginTime",
            description: "Returns the timestamp of the oldest available sample.",
            parameters: &[],
            return_type: "timestamp",
        }],
    ),
];
