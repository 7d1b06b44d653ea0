//! Tests for the routing system
//!
//! Validates route definitions, path recognition and URL parameter parsing
//! for the application's routing table.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use yew_router::Routable;

    /// Tests route recognition for every path in the table
    #[test]
    fn test_route_recognition() {
        assert_eq!(MainRoute::recognize("/"), Some(MainRoute::Root));
        assert_eq!(MainRoute::recognize("/home"), Some(MainRoute::Home));
        assert_eq!(MainRoute::recognize("/login"), Some(MainRoute::Login));
        assert_eq!(
            MainRoute::recognize("/myCommunity"),
            Some(MainRoute::OwnedCommunities)
        );
        assert_eq!(
            MainRoute::recognize("/joinedCommunities"),
            Some(MainRoute::JoinedCommunities)
        );
        assert_eq!(
            MainRoute::recognize("/community/c-123"),
            Some(MainRoute::Community {
                id: "c-123".to_string()
            })
        );
    }

    /// Tests that unknown paths fall through to the not-found route
    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(
            MainRoute::recognize("/no/such/page"),
            Some(MainRoute::NotFound)
        );
    }

    /// Tests route equality
    #[test]
    fn test_route_equality() {
        assert_eq!(MainRoute::Home, MainRoute::Home);

        let first = MainRoute::Community {
            id: "c-1".to_string(),
        };
        let second = MainRoute::Community {
            id: "c-1".to_string(),
        };
        let third = MainRoute::Community {
            id: "c-2".to_string(),
        };
        assert_eq!(first, second);
        assert_ne!(first, third);
    }

    /// Tests route path rendering
    #[test]
    fn test_route_to_path() {
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::OwnedCommunities.to_path(), "/myCommunity");
        assert_eq!(
            MainRoute::Community {
                id: "c-9".to_string()
            }
            .to_path(),
            "/community/c-9"
        );
    }

    /// Tests community ID parameter extraction
    #[test]
    fn test_community_id_parameter() {
        let route = MainRoute::recognize("/community/abc-123").unwrap();
        match route {
            MainRoute::Community { id } => assert_eq!(id, "abc-123"),
            other => panic!("expected community route, got {other:?}"),
        }
    }
}
