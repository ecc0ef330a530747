use camflow::core::transformer::{
    build_project, BOUNDS_ID, EXPORT_ID, EXPORT_SETTINGS_ID, FINE_ID, FINE_TOOLPATH_ID, MODEL_ID,
    ROUGH_ID, ROUGH_TOOLPATH_ID,
};
use camflow_types::{MillingParameters, ProjectDocument};
use serde_json::{json, Value};

fn params(value: Value) -> MillingParameters {
    serde_json::from_value(value).unwrap()
}

fn top_level_keys(project: &ProjectDocument) -> Vec<String> {
    let value = serde_json::to_value(project).unwrap();
    value.as_object().unwrap().keys().cloned().collect()
}

/// Leaf of the serialized project that each recognized input key is copied to.
fn leaf_for<'a>(document: &'a Value, key: &str) -> &'a Value {
    let path: &[&str] = match key {
        "plunge_feedrate" => &["export_settings", "milling", "gcode", "plunge_feedrate"],
        "safety_height" => &["export_settings", "milling", "gcode", "safety_height"],
        "unit" => &["export_settings", "milling", "gcode", "unit"],
        "ngs_output" => &["exports", EXPORT_ID, "target", "location"],
        "model_input" => &["models", "model", "source", "location"],
        "fine_feed" => &["tools", "fine", "feed"],
        "fine_height" => &["tools", "fine", "height"],
        "fine_radius" => &["tools", "fine", "radius"],
        "fine_shape" => &["tools", "fine", "shape"],
        "fine_spindle_speed" => &["tools", "fine", "spindle", "speed"],
        "rough_feed" => &["tools", "rough", "feed"],
        "rough_height" => &["tools", "rough", "height"],
        "rough_radius" => &["tools", "rough", "radius"],
        "rough_shape" => &["tools", "rough", "shape"],
        "rough_spindle_speed" => &["tools", "rough", "spindle", "speed"],
        other => panic!("unexpected key {other}"),
    };
    path.iter().fold(document, |node, segment| &node[*segment])
}

#[test]
fn test_output_always_has_eight_sections() {
    let inputs = [
        json!({}),
        json!({"unit": "mm"}),
        json!({"unrelated": [1, 2, 3], "rough_feed": null}),
    ];
    for input in inputs {
        let project = build_project(&params(input));
        assert_eq!(top_level_keys(&project), ProjectDocument::SECTIONS.to_vec());
    }
}

#[test]
fn test_every_recognized_key_is_passed_through() {
    let mut input = serde_json::Map::new();
    for (index, key) in MillingParameters::KEYS.iter().enumerate() {
        let value = if index % 2 == 0 {
            json!(index * 100)
        } else {
            json!(format!("value-{key}"))
        };
        input.insert(key.to_string(), value);
    }
    let input = Value::Object(input);

    let document = serde_json::to_value(build_project(&params(input.clone()))).unwrap();

    for key in MillingParameters::KEYS {
        assert_eq!(leaf_for(&document, key), &input[key], "key {key}");
    }
}

#[test]
fn test_every_absent_key_is_null() {
    let document = serde_json::to_value(build_project(&params(json!({})))).unwrap();
    for key in MillingParameters::KEYS {
        assert!(leaf_for(&document, key).is_null(), "key {key}");
    }
}

#[test]
fn test_values_are_not_coerced() {
    let project = build_project(&params(json!({
        "fine_radius": "0.5",
        "rough_spindle_speed": -1,
        "unit": 42,
        "safety_height": {"value": 5},
    })));

    assert_eq!(project.tools[FINE_ID].radius, json!("0.5"));
    assert_eq!(project.tools[ROUGH_ID].spindle.speed, json!(-1));
    let gcode = &project.export_settings[EXPORT_SETTINGS_ID].gcode;
    assert_eq!(gcode.unit, json!(42));
    assert_eq!(gcode.safety_height, json!({"value": 5}));
}

#[test]
fn test_transformation_is_idempotent() {
    let input = params(json!({"unit": "mm", "rough_radius": 3, "fine_shape": "ball_nose"}));
    assert_eq!(build_project(&input), build_project(&input));
}

#[test]
fn test_scenario_unit_and_plunge_feedrate() {
    let document = serde_json::to_value(build_project(&params(
        json!({"unit": "mm", "plunge_feedrate": 200}),
    )))
    .unwrap();

    assert_eq!(document["export_settings"]["milling"]["gcode"]["unit"], json!("mm"));
    assert_eq!(
        document["export_settings"]["milling"]["gcode"]["plunge_feedrate"],
        json!(200)
    );
    assert_eq!(document["bounds"]["minimal"]["lower"], json!([5, 5, 0]));
}

#[test]
fn test_scenario_empty_input() {
    let document = serde_json::to_value(build_project(&params(json!({})))).unwrap();

    assert!(document["models"]["model"]["source"]["location"].is_null());
    assert_eq!(document["tools"]["fine"]["tool_id"], json!(2));
    assert_eq!(document["tools"]["rough"]["tool_id"], json!(1));
    assert_eq!(
        document["export_settings"]["milling"]["gcode"]["step_width"],
        json!({"x": 0.0001, "y": 0.0001, "z": 0.0001})
    );
}

#[test]
fn test_vendor_extension_blocks() {
    let document = serde_json::to_value(build_project(&params(json!({})))).unwrap();

    assert_eq!(
        document["bounds"]["minimal"]["X-Application"]["pycam-gtk"]["name"],
        json!("minimal")
    );
    assert_eq!(
        document["models"]["model"]["X-Application"]["pycam-gtk"]["color"],
        json!({"alpha": 0.8, "blue": 1.0, "green": 0.4, "red": 0.1})
    );
    assert_eq!(
        document["tasks"]["rough"]["X-Application"]["pycam-gtk"]["name"],
        json!("Quick Removal")
    );
    assert!(document["exports"][EXPORT_ID].get("X-Application").is_none());
    assert!(document["toolpaths"][ROUGH_TOOLPATH_ID]
        .get("X-Application")
        .is_none());
}

#[test]
fn test_cross_references_resolve() {
    let project = build_project(&params(json!({})));

    let export = &project.exports[EXPORT_ID];
    let toolpath_keys: Vec<&str> = project.toolpaths.keys().map(String::as_str).collect();
    let mut items: Vec<&str> = export.source.items.iter().map(String::as_str).collect();
    items.sort_unstable();
    assert_eq!(items, toolpath_keys);
    assert_eq!(
        export.source.items,
        vec![ROUGH_TOOLPATH_ID.to_string(), FINE_TOOLPATH_ID.to_string()]
    );
    assert!(project
        .export_settings
        .contains_key(&export.format.export_settings));

    for toolpath in project.toolpaths.values() {
        assert!(project.tasks.contains_key(&toolpath.source.item));
    }

    for task in project.tasks.values() {
        assert!(project.tools.contains_key(&task.tool));
        assert!(project.processes.contains_key(&task.process));
        assert!(project.bounds.contains_key(&task.bounds));
        for model in &task.collision_models {
            assert!(project.models.contains_key(model));
        }
    }

    for model in &project.bounds[BOUNDS_ID].reference_models {
        assert_eq!(model, MODEL_ID);
    }
}
