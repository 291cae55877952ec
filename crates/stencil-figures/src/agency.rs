//! Figure 2.2: Agency use case diagram.

use stencil_core::{
    color::Color,
    draw::StrokeStyle,
    geometry::{Point, Size},
    model::{Connection, DiagramSpec, Element, ElementKind, ElementStyle},
};

const USE_CASE_SIZE: Size = Size::new(250.0, 60.0);

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

/// Build the agency use case diagram spec.
pub fn agency_usecase() -> DiagramSpec {
    let mut spec = DiagramSpec::new(
        "Figure 2.2: Agency Use Case Diagram",
        Size::new(1900.0, 1000.0),
    );

    spec.add_element(
        Element::new(
            "system",
            ElementKind::Group,
            "Agency Management System",
            Point::new(1150.0, 500.0),
            Size::new(1300.0, 800.0),
        )
        .with_style(blue_style("#F8F9FA")),
    );

    let groups: &[(&str, &str, Point, Size)] = &[
        (
            "auth_profile",
            "Authentication & Profile",
            Point::new(750.0, 260.0),
            Size::new(300.0, 180.0),
        ),
        (
            "vehicle_management",
            "Vehicle Management",
            Point::new(1175.0, 260.0),
            Size::new(350.0, 180.0),
        ),
        (
            "requests",
            "Request Handling",
            Point::new(1600.0, 260.0),
            Size::new(300.0, 180.0),
        ),
        (
            "comm_reports",
            "Communication & Reports",
            Point::new(1050.0, 560.0),
            Size::new(500.0, 180.0),
        ),
    ];
    for (id, label, position, size) in groups {
        spec.add_element(
            Element::new(*id, ElementKind::Group, *label, *position, *size)
                .with_parent("system")
                .with_style(group_style()),
        );
    }

    spec.add_element(
        Element::new(
            "agency",
            ElementKind::Actor,
            "Agency",
            Point::new(225.0, 490.0),
            Size::new(250.0, 120.0),
        )
        .with_style(blue_style("#E8F4FD")),
    );

    let use_cases: &[(&str, &str, &str, Point)] = &[
        ("login", "Login", "auth_profile", Point::new(750.0, 240.0)),
        (
            "manage_profile",
            "Manage Profile",
            "auth_profile",
            Point::new(750.0, 310.0),
        ),
        (
            "add_vehicle",
            "Add Vehicle",
            "vehicle_management",
            Point::new(1175.0, 240.0),
        ),
        (
            "edit_vehicle",
            "Edit Vehicle",
            "vehicle_management",
            Point::new(1175.0, 290.0),
        ),
        (
            "set_pricing",
            "Set Pricing",
            "vehicle_management",
            Point::new(1175.0, 340.0),
        ),
        (
            "view_requests",
            "View Requests",
            "requests",
            Point::new(1600.0, 240.0),
        ),
        (
            "accept_reject",
            "Accept/Reject",
            "requests",
            Point::new(1600.0, 310.0),
        ),
        (
            "chat_with_customer",
            "Chat with Customer",
            "comm_reports",
            Point::new(1050.0, 540.0),
        ),
        (
            "generate_reports",
            "Generate Reports",
            "comm_reports",
            Point::new(1050.0, 590.0),
        ),
        (
            "send_notifications",
            "Send Notifications",
            "comm_reports",
            Point::new(1050.0, 640.0),
        ),
    ];
    for (id, label, parent, position) in use_cases {
        spec.add_element(
            Element::new(*id, ElementKind::Node, *label, *position, USE_CASE_SIZE)
                .with_parent(*parent),
        );
    }

    for group in [
        "auth_profile",
        "vehicle_management",
        "requests",
        "comm_reports",
    ] {
        spec.add_connection(Connection::new("agency", group).with_style(StrokeStyle::Dashed));
    }

    spec
}
