//! Metaclass tags and the metaclass hierarchy.
//!
//! Only the part of the SysML v2 / KerML metamodel that mapping rules and
//! description naming need to reason about is modelled here. Each kind lists
//! its *direct* supertypes; [`ElementKind::is_subtype_of`] walks them
//! transitively, so multiple inheritance (e.g. `ConnectionUsage` is both a
//! `ConnectorAsUsage` and a `PartUsage`) behaves like the metamodel.

/// The metatype of a model element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Element,

    // Namespaces and Packages
    Namespace,
    Package,
    LibraryPackage,

    // Types and Classifiers
    Type,
    Classifier,
    Definition,
    AttributeDefinition,
    OccurrenceDefinition,
    ItemDefinition,
    PartDefinition,
    PortDefinition,
    ActionDefinition,
    StateDefinition,
    ConstraintDefinition,
    RequirementDefinition,
    ConnectionDefinition,
    InterfaceDefinition,
    EnumerationDefinition,

    // KerML Features
    Feature,
    Step,
    Connector,
    BindingConnector,
    Succession,

    // SysML Usages
    Usage,
    AttributeUsage,
    EnumerationUsage,
    ReferenceUsage,
    OccurrenceUsage,
    ItemUsage,
    PartUsage,
    PortUsage,
    ActionUsage,
    StateUsage,
    ConstraintUsage,
    RequirementUsage,
    ConnectorAsUsage,
    BindingConnectorAsUsage,
    SuccessionAsUsage,
    ConnectionUsage,
    InterfaceUsage,
    AllocationUsage,
    FlowConnectionUsage,

    // Relationships
    Relationship,
    Membership,
    OwningMembership,
    FeatureMembership,
    Specialization,
    Subclassification,
    FeatureTyping,
    Subsetting,
    ReferenceSubsetting,
    Redefinition,
}

impl ElementKind {
    /// Every kind, in declaration order.
    pub const ALL: &'static [ElementKind] = &[
        Self::Element,
        Self::Namespace,
        Self::Package,
        Self::LibraryPackage,
        Self::Type,
        Self::Classifier,
        Self::Definition,
        Self::AttributeDefinition,
        Self::OccurrenceDefinition,
        Self::ItemDefinition,
        Self::PartDefinition,
        Self::PortDefinition,
        Self::ActionDefinition,
        Self::StateDefinition,
        Self::ConstraintDefinition,
        Self::RequirementDefinition,
        Self::ConnectionDefinition,
        Self::InterfaceDefinition,
        Self::EnumerationDefinition,
        Self::Feature,
        Self::Step,
        Self::Connector,
        Self::BindingConnector,
        Self::Succession,
        Self::Usage,
        Self::AttributeUsage,
        Self::EnumerationUsage,
        Self::ReferenceUsage,
        Self::OccurrenceUsage,
        Self::ItemUsage,
        Self::PartUsage,
        Self::PortUsage,
        Self::ActionUsage,
        Self::StateUsage,
        Self::ConstraintUsage,
        Self::RequirementUsage,
        Self::ConnectorAsUsage,
        Self::BindingConnectorAsUsage,
        Self::SuccessionAsUsage,
        Self::ConnectionUsage,
        Self::InterfaceUsage,
        Self::AllocationUsage,
        Self::FlowConnectionUsage,
        Self::Relationship,
        Self::Membership,
        Self::OwningMembership,
        Self::FeatureMembership,
        Self::Specialization,
        Self::Subclassification,
        Self::FeatureTyping,
        Self::Subsetting,
        Self::ReferenceSubsetting,
        Self::Redefinition,
    ];

    /// The metaclass name, e.g. `"PartUsage"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Element => "Element",
            Self::Namespace => "Namespace",
            Self::Package => "Package",
            Self::LibraryPackage => "LibraryPackage",
            Self::Type => "Type",
            Self::Classifier => "Classifier",
            Self::Definition => "Definition",
            Self::AttributeDefinition => "AttributeDefinition",
            Self::OccurrenceDefinition => "OccurrenceDefinition",
            Self::ItemDefinition => "ItemDefinition",
            Self::PartDefinition => "PartDefinition",
            Self::PortDefinition => "PortDefinition",
            Self::ActionDefinition => "ActionDefinition",
            Self::StateDefinition => "StateDefinition",
            Self::ConstraintDefinition => "ConstraintDefinition",
            Self::RequirementDefinition => "RequirementDefinition",
            Self::ConnectionDefinition => "ConnectionDefinition",
            Self::InterfaceDefinition => "InterfaceDefinition",
            Self::EnumerationDefinition => "EnumerationDefinition",
            Self::Feature => "Feature",
            Self::Step => "Step",
            Self::Connector => "Connector",
            Self::BindingConnector => "BindingConnector",
            Self::Succession => "Succession",
            Self::Usage => "Usage",
            Self::AttributeUsage => "AttributeUsage",
            Self::EnumerationUsage => "EnumerationUsage",
            Self::ReferenceUsage => "ReferenceUsage",
            Self::OccurrenceUsage => "OccurrenceUsage",
            Self::ItemUsage => "ItemUsage",
            Self::PartUsage => "PartUsage",
            Self::PortUsage => "PortUsage",
            Self::ActionUsage => "ActionUsage",
            Self::StateUsage => "StateUsage",
            Self::ConstraintUsage => "ConstraintUsage",
            Self::RequirementUsage => "RequirementUsage",
            Self::ConnectorAsUsage => "ConnectorAsUsage",
            Self::BindingConnectorAsUsage => "BindingConnectorAsUsage",
            Self::SuccessionAsUsage => "SuccessionAsUsage",
            Self::ConnectionUsage => "ConnectionUsage",
            Self::InterfaceUsage => "InterfaceUsage",
            Self::AllocationUsage => "AllocationUsage",
            Self::FlowConnectionUsage => "FlowConnectionUsage",
            Self::Relationship => "Relationship",
            Self::Membership => "Membership",
            Self::OwningMembership => "OwningMembership",
            Self::FeatureMembership => "FeatureMembership",
            Self::Specialization => "Specialization",
            Self::Subclassification => "Subclassification",
            Self::FeatureTyping => "FeatureTyping",
            Self::Subsetting => "Subsetting",
            Self::ReferenceSubsetting => "ReferenceSubsetting",
            Self::Redefinition => "Redefinition",
        }
    }

    /// Parse from a `$type` tag. A namespace prefix (`sysml:`) is ignored.
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        let type_name = type_name.rsplit(':').next().unwrap_or(type_name);
        Self::ALL.iter().copied().find(|kind| kind.name() == type_name)
    }

    /// Direct supertypes in the metamodel.
    pub fn supertypes(&self) -> &'static [ElementKind] {
        use ElementKind::*;
        match self {
            Element => &[],
            Namespace => &[Element],
            Package => &[Namespace],
            LibraryPackage => &[Package],
            Type => &[Namespace],
            Classifier => &[Type],
            Definition => &[Classifier],
            AttributeDefinition => &[Definition],
            OccurrenceDefinition => &[Definition],
            ItemDefinition => &[OccurrenceDefinition],
            PartDefinition => &[ItemDefinition],
            PortDefinition => &[OccurrenceDefinition],
            ActionDefinition => &[OccurrenceDefinition],
            StateDefinition => &[ActionDefinition],
            ConstraintDefinition => &[OccurrenceDefinition],
            RequirementDefinition => &[ConstraintDefinition],
            ConnectionDefinition => &[PartDefinition],
            InterfaceDefinition => &[ConnectionDefinition],
            EnumerationDefinition => &[AttributeDefinition],
            Feature => &[Type],
            Step => &[Feature],
            Connector => &[Feature, Relationship],
            BindingConnector => &[Connector],
            Succession => &[Connector],
            Usage => &[Feature],
            AttributeUsage => &[Usage],
            EnumerationUsage => &[AttributeUsage],
            ReferenceUsage => &[Usage],
            OccurrenceUsage => &[Usage],
            ItemUsage => &[OccurrenceUsage],
            PartUsage => &[ItemUsage],
            PortUsage => &[OccurrenceUsage],
            ActionUsage => &[OccurrenceUsage, Step],
            StateUsage => &[ActionUsage],
            ConstraintUsage => &[OccurrenceUsage],
            RequirementUsage => &[ConstraintUsage],
            ConnectorAsUsage => &[Usage, Connector],
            BindingConnectorAsUsage => &[ConnectorAsUsage, BindingConnector],
            SuccessionAsUsage => &[ConnectorAsUsage, Succession],
            ConnectionUsage => &[ConnectorAsUsage, PartUsage],
            InterfaceUsage => &[ConnectionUsage],
            AllocationUsage => &[ConnectionUsage],
            FlowConnectionUsage => &[ConnectionUsage, ActionUsage],
            Relationship => &[Element],
            Membership => &[Relationship],
            OwningMembership => &[Membership],
            FeatureMembership => &[OwningMembership],
            Specialization => &[Relationship],
            Subclassification => &[Specialization],
            FeatureTyping => &[Specialization],
            Subsetting => &[Specialization],
            ReferenceSubsetting => &[Subsetting],
            Redefinition => &[Subsetting],
        }
    }

    /// Returns true if `self` is `other` or inherits from it.
    pub fn is_subtype_of(&self, other: ElementKind) -> bool {
        *self == other
            || self
                .supertypes()
                .iter()
                .any(|supertype| supertype.is_subtype_of(other))
    }

    /// Returns true if this kind is a Feature (or Feature subtype).
    pub fn is_feature(&self) -> bool {
        self.is_subtype_of(Self::Feature)
    }

    /// Returns true if this kind is a SysML Usage.
    pub fn is_usage(&self) -> bool {
        self.is_subtype_of(Self::Usage)
    }

    /// Returns true if this kind is a relationship.
    pub fn is_relationship(&self) -> bool {
        self.is_subtype_of(Self::Relationship)
    }

    /// Returns true if elements of this kind can own named members.
    pub fn is_namespace(&self) -> bool {
        self.is_subtype_of(Self::Namespace)
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_name_roundtrip() {
        for kind in ElementKind::ALL {
            assert_eq!(ElementKind::from_type_name(kind.name()), Some(*kind));
        }
    }

    #[test]
    fn test_type_name_with_prefix() {
        assert_eq!(
            ElementKind::from_type_name("sysml:Redefinition"),
            Some(ElementKind::Redefinition)
        );
        assert_eq!(ElementKind::from_type_name("NotAMetaclass"), None);
    }

    #[test]
    fn test_redefinition_is_subsetting() {
        assert!(ElementKind::Redefinition.is_subtype_of(ElementKind::Subsetting));
        assert!(ElementKind::Redefinition.is_subtype_of(ElementKind::Specialization));
        assert!(ElementKind::Redefinition.is_relationship());
        assert!(!ElementKind::Subsetting.is_subtype_of(ElementKind::Redefinition));
    }

    #[test]
    fn test_multiple_inheritance() {
        assert!(ElementKind::ConnectionUsage.is_subtype_of(ElementKind::PartUsage));
        assert!(ElementKind::ConnectionUsage.is_subtype_of(ElementKind::Connector));
        assert!(ElementKind::SuccessionAsUsage.is_subtype_of(ElementKind::Succession));
        assert!(ElementKind::FlowConnectionUsage.is_subtype_of(ElementKind::Step));
    }

    #[test]
    fn test_usages_are_features() {
        for kind in ElementKind::ALL.iter().filter(|k| k.is_usage()) {
            assert!(kind.is_feature(), "{kind} should be a Feature");
        }
        assert!(!ElementKind::PartDefinition.is_feature());
        assert!(!ElementKind::Package.is_usage());
    }
}
