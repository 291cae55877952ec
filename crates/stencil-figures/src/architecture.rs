//! Figure 1: System architecture overview.
//!
//! Rendered through the Mermaid strategy; positions are nominal layer/row
//! slots since the external compiler performs its own layout.

use stencil_core::{
    color::Color,
    geometry::{Point, Size},
    model::{Connection, DiagramSpec, Direction, Element, ElementKind, ElementStyle},
};

const NODE_SIZE: Size = Size::new(280.0, 160.0);

fn class_style(fill: &str, border: &str) -> ElementStyle {
    ElementStyle::new()
        .with_fill(Color::new(fill).expect("valid color"))
        .with_border(Color::new(border).expect("valid color"))
        .with_border_width(2.0)
}

/// Build the system architecture overview spec.
pub fn architecture_overview() -> DiagramSpec {
    let mut spec = DiagramSpec::new(
        "Figure 1: System Architecture Overview",
        Size::new(1200.0, 900.0),
    );

    let layers: &[(&str, &str, f32)] = &[
        ("presentation", "PRESENTATION LAYER", 120.0),
        ("services", "APPLICATION SERVICES", 340.0),
        ("persistence", "DATA PERSISTENCE", 560.0),
        ("infrastructure", "INFRASTRUCTURE", 780.0),
    ];
    for (id, label, y) in layers {
        spec.add_element(Element::new(
            *id,
            ElementKind::Group,
            *label,
            Point::new(600.0, *y),
            Size::new(1100.0, 200.0),
        ));
    }

    let nodes: &[(&str, &str, &str, Point, ElementStyle)] = &[
        (
            "angular",
            "Angular Frontend\n\n\u{2022} Component Architecture\n\u{2022} Responsive Design\n\u{2022} State Management\n\u{2022} Route Guards",
            "presentation",
            Point::new(600.0, 120.0),
            class_style("#E3F2FD", "#1976D2"),
        ),
        (
            "api",
            "Spring Boot API\n\n\u{2022} REST Services\n\u{2022} Business Logic\n\u{2022} Security Integration\n\u{2022} Data Processing",
            "services",
            Point::new(250.0, 340.0),
            class_style("#E8F5E8", "#388E3C"),
        ),
        (
            "chatbot",
            "FastAPI Chatbot\n\n\u{2022} AI Assistant\n\u{2022} OpenAI Integration\n\u{2022} Real-time Chat\n\u{2022} NLP Processing",
            "services",
            Point::new(600.0, 340.0),
            class_style("#FFF3E0", "#F57C00"),
        ),
        (
            "keycloak",
            "Keycloak Identity\n\n\u{2022} OAuth2 Authentication\n\u{2022} JWT Token Management\n\u{2022} Role-based Access\n\u{2022} Single Sign-On",
            "services",
            Point::new(950.0, 340.0),
            class_style("#F5F5F5", "#757575"),
        ),
        (
            "mysql",
            "MySQL Database\n\n\u{2022} User & Agency Data\n\u{2022} Vehicle Inventory\n\u{2022} Booking Records\n\u{2022} Content Management",
            "persistence",
            Point::new(600.0, 560.0),
            class_style("#F3E5F5", "#7C3AED"),
        ),
        (
            "docker",
            "Docker Containerization\n\n\u{2022} Service Isolation\n\u{2022} Portable Deployment",
            "infrastructure",
            Point::new(250.0, 780.0),
            class_style("#F0F4FF", "#1565C0"),
        ),
        (
            "kubernetes",
            "Kubernetes Orchestration\n\n\u{2022} Auto-scaling\n\u{2022} Load Balancing",
            "infrastructure",
            Point::new(600.0, 780.0),
            class_style("#F0F4FF", "#1565C0"),
        ),
        (
            "gitlab",
            "GitLab CI/CD Automation\n\n\u{2022} Automated Testing\n\u{2022} Continuous Deployment",
            "infrastructure",
            Point::new(950.0, 780.0),
            class_style("#F0F4FF", "#1565C0"),
        ),
    ];
    for (id, label, parent, position, style) in nodes {
        spec.add_element(
            Element::new(*id, ElementKind::Node, *label, *position, NODE_SIZE)
                .with_parent(*parent)
                .with_style(style.clone()),
        );
    }

    for (source, target, label) in [
        ("angular", "api", Some("HTTPS REST")),
        ("angular", "chatbot", Some("WebSocket")),
        ("angular", "keycloak", Some("Auth Flow")),
        ("api", "mysql", Some("JDBC")),
        ("api", "docker", None),
        ("chatbot", "docker", None),
        ("keycloak", "docker", None),
        ("docker", "kubernetes", None),
        ("kubernetes", "gitlab", None),
    ] {
        let mut connection = Connection::new(source, target).with_direction(Direction::Forward);
        if let Some(label) = label {
            connection = connection.with_label(label);
        }
        spec.add_connection(connection);
    }

    spec.add_connection(
        Connection::new("api", "keycloak")
            .with_direction(Direction::Bidirectional)
            .with_label("JWT"),
    );

    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_layers_eight_services() {
        let spec = architecture_overview();
        let groups = spec
            .elements()
            .iter()
            .filter(|e| e.kind() == ElementKind::Group)
            .count();
        assert_eq!(groups, 4);

        let nodes = spec
            .elements()
            .iter()
            .filter(|e| e.kind() == ElementKind::Node)
            .count();
        assert_eq!(nodes, 8);
    }

    #[test]
    fn test_jwt_link_is_bidirectional() {
        let spec = architecture_overview();
        let jwt = spec
            .connections()
            .iter()
            .find(|c| c.label() == Some("JWT"))
            .unwrap();
        assert_eq!(jwt.direction(), Direction::Bidirectional);
    }

    #[test]
    fn test_infrastructure_chain() {
        let spec = architecture_overview();
        assert!(
            spec.connections()
                .iter()
                .any(|c| c.source() == "docker" && c.target() == "kubernetes")
        );
        assert!(
            spec.connections()
                .iter()
                .any(|c| c.source() == "kubernetes" && c.target() == "gitlab")
        );
    }

    #[test]
    fn test_spec_validates() {
        assert!(architecture_overview().validate().is_ok());
    }
}
