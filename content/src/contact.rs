use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub address: Vec<String>,
    pub phone: String,
    pub email: String,
    pub hours: String,
}

// settings handed to the external map renderer, when one is present on the page
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub lat: f64,
    pub lng: f64,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    pub title: String,
    #[serde(default)]
    pub marker_color: Option<String>,
}

fn default_zoom() -> u8 {
    15
}

impl MapConfig {
    // script for the page's map api; it evaluates to true once the map is placed and to
    // false when the container is missing
    pub fn init_script(&self) -> anyhow::Result<String> {
        let title = serde_json::to_string(&self.title)?;
        let icon = match &self.marker_color {
            Some(color) => format!(
                "icon: {{ path: google.maps.SymbolPath.CIRCLE, scale: 10, fillColor: {}, fillOpacity: 1, strokeWeight: 2, strokeColor: \"#ffffff\" }},",
                serde_json::to_string(color)?
            ),
            None => String::new(),
        };

        Ok(format!(
            r#"
const el = document.getElementById("googleMap");
if (el) {{
  const center = {{ lat: {lat}, lng: {lng} }};
  const map = new google.maps.Map(el, {{ center, zoom: {zoom}, mapTypeControl: false, streetViewControl: false }});
  new google.maps.Marker({{ position: center, map, title: {title}, {icon} }});
  return true;
}}
return false;
"#,
            lat = self.lat,
            lng = self.lng,
            zoom = self.zoom,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(title: &str) -> MapConfig {
        MapConfig {
            lat: 14.5,
            lng: 121.0,
            zoom: 16,
            title: title.to_owned(),
            marker_color: None,
        }
    }

    #[test]
    fn init_script_reports_whether_the_map_was_placed() {
        let script = map("School").init_script().expect("map script builds");

        assert!(script.contains("return true;"));
        assert!(script.trim_end().ends_with("return false;"));
        assert!(script.contains("lat: 14.5, lng: 121"));
        assert!(script.contains("zoom: 16"));
        assert!(!script.contains("icon:"));
    }

    #[test]
    fn init_script_escapes_marker_strings() {
        let mut config = map(r#"St. "Joseph" </script>"#);
        config.marker_color = Some(String::from("#b91c1c"));
        let script = config.init_script().expect("map script builds");

        assert!(script.contains(r#"title: "St. \"Joseph\" </script>""#));
        assert!(script.contains(r##"fillColor: "#b91c1c""##));
    }
}
