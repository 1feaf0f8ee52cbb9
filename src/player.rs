//! Player page rendering for localplay
//!
//! This module renders the browser player page once at startup, injecting
//! the run configuration (file display name, playback speed, media route)
//! into the static HTML template.

use crate::{
    config::{AUDIO_ROUTE, Config},
    error::Result,
    media::ServedResource,
};
use askama::Template;

/// Template context for the browser player page
#[derive(Template)]
#[template(path = "player.html")]
struct PlayerPageTemplate<'a> {
    file_name: &'a str,
    speed: f64,
    audio_route: &'static str,
}

/// Renders the player page for the served resource
///
/// Rendering happens once at startup; a failure here is fatal.
pub fn render_player_page(resource: &ServedResource, config: &Config) -> Result<String> {
    let template = PlayerPageTemplate {
        file_name: resource.display_name(),
        speed: config.playback_speed,
        audio_route: AUDIO_ROUTE,
    };

    template
        .render()
        .map_err(|e| crate::error::Error::TemplateRenderError {
            template_name: "player.html".to_string(),
            source: e.into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn test_resource(name: &str) -> (tempfile::TempDir, ServedResource) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, b"abc").unwrap();
        let resource = ServedResource::new(Path::new(&path)).unwrap();
        (dir, resource)
    }

    #[test]
    fn test_page_contains_injected_configuration() {
        let (_dir, resource) = test_resource("My Song.mp3");
        let config = Config::new().with_playback_speed(1.5);

        let page = render_player_page(&resource, &config).unwrap();
        assert!(page.contains("My Song.mp3"));
        assert!(page.contains("1.5"));
        assert!(page.contains(AUDIO_ROUTE));
    }

    #[test]
    fn test_page_escapes_markup_in_file_names() {
        let (_dir, resource) = test_resource("a<b>.mp3");
        let config = Config::new();

        let page = render_player_page(&resource, &config).unwrap();
        assert!(!page.contains("a<b>.mp3"));
        assert!(page.contains("a&lt;b&gt;.mp3"));
    }
}
