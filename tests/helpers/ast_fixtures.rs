//! Node trees as produced by the upstream parser.

use serde_json::{Value, json};

/// An attribute usage node, optionally carrying child nodes.
pub fn attribute(name: &str, children: Vec<Value>) -> Value {
    json!({ "$type": "AttributeUsage", "declaredName": name, "children": children })
}

/// A redefinition node pointing at `target`.
pub fn redefinition(target: &str) -> Value {
    json!({
        "$type": "Redefinition",
        "targetRef": { "$type": "QualifiedName", "$text": target }
    })
}

/// A part definition node.
pub fn part_def(name: &str, children: Vec<Value>) -> Value {
    json!({ "$type": "PartDefinition", "declaredName": name, "children": children })
}

pub fn package(name: &str, children: Vec<Value>) -> Value {
    json!({ "$type": "Package", "declaredName": name, "children": children })
}

/// ```sysml
/// package Vehicles {
///     part def Vehicle { attribute mass; }
///     part def Car { attribute carMass redefines <target>; }
/// }
/// ```
pub fn vehicles_with_redefinition(target: &str) -> Value {
    package(
        "Vehicles",
        vec![
            part_def("Vehicle", vec![attribute("mass", vec![])]),
            part_def(
                "Car",
                vec![attribute("carMass", vec![redefinition(target)])],
            ),
        ],
    )
}
