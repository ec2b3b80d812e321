// Routes: "/" (Overview) and "/pet/{petId}" (Detail)

use crate::error::RouteError;
use crate::pet::PetId;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Overview,
    Detail(PetId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Overview => "/".to_string(),
            Route::Detail(id) => format!("/pet/{}", id),
        }
    }

    /// Parse a route path. A trailing slash is accepted on the detail route.
    pub fn parse(path: &str) -> Result<Route, RouteError> {
        if path.is_empty() || path == "/" {
            return Ok(Route::Overview);
        }

        let trimmed = path.trim_end_matches('/');
        let raw_id = trimmed
            .strip_prefix("/pet/")
            .or_else(|| trimmed.strip_prefix("pet/"))
            .ok_or_else(|| RouteError::UnknownPath(path.to_string()))?;

        if raw_id.is_empty() || !raw_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RouteError::InvalidPetId(raw_id.to_string()));
        }

        raw_id
            .parse::<PetId>()
            .map(Route::Detail)
            .map_err(|_| RouteError::InvalidPetId(raw_id.to_string()))
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Overview => "Pets",
            Route::Detail(_) => "Pet Details",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

impl std::str::FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Overview.path(), "/");
        assert_eq!(Route::Detail(1).path(), "/pet/1");
        assert_eq!(Route::Detail(42).to_string(), "/pet/42");
    }

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Ok(Route::Overview));
        assert_eq!(Route::parse(""), Ok(Route::Overview));
        assert_eq!(Route::parse("/pet/1"), Ok(Route::Detail(1)));
        assert_eq!(Route::parse("/pet/5/"), Ok(Route::Detail(5)));
        assert_eq!(Route::parse("pet/3"), Ok(Route::Detail(3)));
        assert_eq!("/pet/0".parse::<Route>(), Ok(Route::Detail(0)));
    }

    #[test]
    fn test_parse_invalid_routes() {
        assert_eq!(
            Route::parse("/pets"),
            Err(RouteError::UnknownPath("/pets".to_string()))
        );
        assert_eq!(
            Route::parse("/pet/abc"),
            Err(RouteError::InvalidPetId("abc".to_string()))
        );
        assert_eq!(
            Route::parse("/pet/-1"),
            Err(RouteError::InvalidPetId("-1".to_string()))
        );
        assert!(Route::parse("/pet/").is_err());
    }

    #[test]
    fn test_parse_rejects_signed_ids() {
        assert_eq!(
            Route::parse("/pet/+1"),
            Err(RouteError::InvalidPetId("+1".to_string()))
        );
        assert_eq!(
            Route::parse("/pet/ 1"),
            Err(RouteError::InvalidPetId(" 1".to_string()))
        );
    }

    #[test]
    fn test_parse_path_round_trip() {
        for route in [Route::Overview, Route::Detail(0), Route::Detail(99)] {
            assert_eq!(Route::parse(&route.path()), Ok(route));
        }
    }
}
