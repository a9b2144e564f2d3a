//! KML document emission for polygon and label records
//!
//! Writes one Placemark per polygon record and, for numbered cells, one
//! iconless point Placemark carrying the centered number label.

use std::fs;
use std::path::Path;

use crate::grid::feature::PolygonFeature;
use crate::io::error::{GridError, Result};

const HEADER: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
    "<kml xmlns=\"http://www.opengis.net/kml/2.2\">\n",
    "<Document>\n",
);
const FOOTER: &str = "</Document>\n</kml>\n";

/// Render features into a complete KML document string
pub fn render_document(features: &[PolygonFeature]) -> String {
    let mut doc = String::from(HEADER);

    for feature in features {
        push_polygon(&mut doc, feature);
        if let Some(label) = &feature.label {
            push_label(&mut doc, label.position.lon, label.position.lat, &label.text);
        }
    }

    doc.push_str(FOOTER);
    doc
}

/// Write features to `path` as a KML file, creating parent directories
///
/// # Errors
///
/// Returns a file system error when directory creation or the write fails.
pub fn write_document(features: &[PolygonFeature], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    fs::write(path, render_document(features)).map_err(|e| GridError::FileSystem {
        path: path.to_path_buf(),
        operation: "write KML",
        source: e,
    })
}

fn push_polygon(doc: &mut String, feature: &PolygonFeature) {
    doc.push_str("<Placemark>\n<Style>\n<LineStyle><color>");
    doc.push_str(&feature.line_color);
    doc.push_str("</color><width>");
    doc.push_str(&feature.line_width.to_string());
    doc.push_str("</width></LineStyle>\n<PolyStyle><fill>");
    doc.push(if feature.fill { '1' } else { '0' });
    doc.push_str("</fill>");
    if let Some(color) = &feature.fill_color {
        doc.push_str("<color>");
        doc.push_str(color);
        doc.push_str("</color>");
    }
    doc.push_str("</PolyStyle>\n</Style>\n");
    doc.push_str("<Polygon><outerBoundaryIs><LinearRing><coordinates>");
    for (index, (lon, lat)) in feature.ring.iter().enumerate() {
        if index > 0 {
            doc.push(' ');
        }
        doc.push_str(&format!("{lon},{lat},0"));
    }
    doc.push_str("</coordinates></LinearRing></outerBoundaryIs></Polygon>\n");
    doc.push_str("</Placemark>\n");
}

// Iconless point Placemark so only the name renders
fn push_label(doc: &mut String, lon: f64, lat: f64, text: &str) {
    doc.push_str("<Placemark>\n<name>");
    doc.push_str(text);
    doc.push_str("</name>\n<Style><IconStyle><Icon><href></href></Icon></IconStyle></Style>\n");
    doc.push_str(&format!("<Point><coordinates>{lon},{lat},0</coordinates></Point>\n"));
    doc.push_str("</Placemark>\n");
}
