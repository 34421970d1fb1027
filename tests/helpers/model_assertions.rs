//! Lookup helpers over mapped models.

use syster_mapping::model::{Element, ElementKind, Model};

/// The element whose qualified name is `qualified`.
pub fn by_qualified_name<'m>(model: &'m Model, qualified: &str) -> &'m Element {
    model
        .iter_elements()
        .find(|e| model.qualified_name(&e.id).as_deref() == Some(qualified))
        .unwrap_or_else(|| panic!("no element named {qualified}"))
}

/// All elements of exactly `kind`, in mapping order.
pub fn of_kind(model: &Model, kind: ElementKind) -> Vec<&Element> {
    model.iter_elements().filter(|e| e.kind == kind).collect()
}

/// The only Redefinition in `model`.
pub fn single_redefinition(model: &Model) -> &Element {
    let redefinitions = of_kind(model, ElementKind::Redefinition);
    assert_eq!(redefinitions.len(), 1, "expected exactly one Redefinition");
    redefinitions[0]
}
