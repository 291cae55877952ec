//! Figure 2.3: Administrator use case diagram.

use stencil_core::{
    color::Color,
    draw::StrokeStyle,
    geometry::{Point, Size},
    model::{Connection, DiagramSpec, Element, ElementKind, ElementStyle},
};

const USE_CASE_SIZE: Size = Size::new(260.0, 60.0);

fn blue_style(fill: &str) -> ElementStyle {
    ElementStyle::new()
        .with_fill(Color::new(fill).expect("valid color"))
        .with_border(Color::new("#1976D2").expect("valid color"))
        .with_border_width(3.0)
}

fn group_style() -> ElementStyle {
    ElementStyle::new()
        .with_fill(Color::new("#FAFAFA").expect("valid color"))
        .with_border(Color::new("#E0E0E0").expect("valid color"))
        .with_border_width(1.0)
}

/// Build the administrator use case diagram spec.
pub fn admin_usecase() -> DiagramSpec {
    let mut spec = DiagramSpec::new(
        "Figure 2.3: Administrator Use Case Diagram",
        Size::new(1900.0, 1000.0),
    );

    spec.add_element(
        Element::new(
            "platform",
            ElementKind::Group,
            "Platform Administration",
            Point::new(1150.0, 500.0),
            Size::new(1300.0, 800.0),
        )
        .with_style(blue_style("#F8F9FA")),
    );

    let groups: &[(&str, &str, Point, Size)] = &[
        (
            "user_management",
            "User Management",
            Point::new(750.0, 260.0),
            Size::new(300.0, 180.0),
        ),
        (
            "system_config",
            "System Configuration",
            Point::new(1150.0, 260.0),
            Size::new(300.0, 180.0),
        ),
        (
            "analytics",
            "Analytics & Monitoring",
            Point::new(1575.0, 260.0),
            Size::new(350.0, 180.0),
        ),
        (
            "content_finance",
            "Content & Finance",
            Point::new(1100.0, 560.0),
            Size::new(600.0, 180.0),
        ),
    ];
    for (id, label, position, size) in groups {
        spec.add_element(
            Element::new(*id, ElementKind::Group, *label, *position, *size)
                .with_parent("platform")
                .with_style(group_style()),
        );
    }

    spec.add_element(
        Element::new(
            "admin",
            ElementKind::Actor,
            "Administrator",
            Point::new(225.0, 490.0),
            Size::new(250.0, 120.0),
        )
        .with_style(blue_style("#E8F4FD")),
    );

    let use_cases: &[(&str, &str, &str, Point)] = &[
        (
            "manage_agencies",
            "Manage Agencies",
            "user_management",
            Point::new(750.0, 240.0),
        ),
        (
            "manage_users",
            "Manage Users",
            "user_management",
            Point::new(750.0, 310.0),
        ),
        (
            "configure_system",
            "Configure System",
            "system_config",
            Point::new(1150.0, 240.0),
        ),
        (
            "manage_permissions",
            "Manage Permissions",
            "system_config",
            Point::new(1150.0, 310.0),
        ),
        (
            "view_analytics",
            "View Analytics",
            "analytics",
            Point::new(1575.0, 240.0),
        ),
        (
            "monitor_system",
            "Monitor System",
            "analytics",
            Point::new(1575.0, 310.0),
        ),
        (
            "moderate_content",
            "Moderate Content",
            "content_finance",
            Point::new(1100.0, 540.0),
        ),
        (
            "view_revenue",
            "View Revenue",
            "content_finance",
            Point::new(1100.0, 590.0),
        ),
        (
            "generate_reports",
            "Generate Reports",
            "content_finance",
            Point::new(1100.0, 640.0),
        ),
    ];
    for (id, label, parent, position) in use_cases {
        spec.add_element(
            Element::new(*id, ElementKind::Node, *label, *position, USE_CASE_SIZE)
                .with_parent(*parent),
        );
    }

    for group in [
        "user_management",
        "system_config",
        "analytics",
        "content_finance",
    ] {
        spec.add_connection(Connection::new("admin", group).with_style(StrokeStyle::Dashed));
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let spec = admin_usecase();
        let nodes = spec
            .elements()
            .iter()
            .filter(|e| e.kind() == ElementKind::Node)
            .count();
        assert_eq!(nodes, 9);

        let actors = spec
            .elements()
            .iter()
            .filter(|e| e.kind() == ElementKind::Actor)
            .count();
        assert_eq!(actors, 1);
    }

    #[test]
    fn test_every_use_case_belongs_to_a_group() {
        let spec = admin_usecase();
        assert!(
            spec.elements()
                .iter()
                .filter(|e| e.kind() == ElementKind::Node)
                .all(|e| e.parent().is_some())
        );
    }

    #[test]
    fn test_spec_validates() {
        assert!(admin_usecase().validate().is_ok());
    }
}
