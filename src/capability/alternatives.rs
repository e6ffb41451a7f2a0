/// Suggested replacements for components that are not implemented, keyed by
/// capability id. Mirrors what the component catalog can actually do today.
const ALTERNATIVES: &[(&str, &str)] = &[
    (
        "crowd-counter-v1",
        "Use YOLOv8 person detection with zone counting instead",
    ),
    (
        "vehicle-classifier-v1",
        "Use YOLOv8 with the vehicle classes (2=car, 5=bus, 7=truck) instead",
    ),
    (
        "traffic-flow-v1",
        "Use YOLOv8 object tracking with line crossing instead",
    ),
    (
        "fall-detector-v1",
        "Use pose estimation with a fall heuristic instead",
    ),
    (
        "age-gender-v1",
        "Use face detection with a demographics-enabled backend instead",
    ),
];

/// Returns the suggested alternative for a capability id, falling back to a
/// generic hint when no specific replacement is known.
pub fn alternative_for(capability_id: &str) -> &'static str {
    ALTERNATIVES
        .iter()
        .find(|(id, _)| *id == capability_id)
        .map(|(_, alternative)| *alternative)
        .unwrap_or("Check the component catalog for a supported alternative")
}
