//! Detail panel rendering: a pure function from the selected parcel (or
//! none) to the panel's inner HTML. The host page's stylesheet owns all
//! presentation; classes here mirror its selectors.

use crate::model::{OilGasInfo, Parcel};

/// Render the panel body for the current selection.
pub fn detail_html(parcel: Option<&Parcel>) -> String {
    match parcel {
        Some(p) => selected_html(p),
        None => empty_html(),
    }
}

fn selected_html(p: &Parcel) -> String {
    let mut html = String::new();
    html.push_str(&format!(
        "<div class=\"property-card\"><h3>Location</h3><p>{}</p></div>",
        p.address
    ));
    html.push_str("<div class=\"stats-grid\">");
    html.push_str(&format!(
        "<div class=\"stat-card stat-green\"><h4>Property Value</h4><p>{}</p></div>",
        p.value
    ));
    html.push_str(&format!(
        "<div class=\"stat-card stat-purple\"><h4>Acreage</h4><p>{}</p></div>",
        p.size
    ));
    html.push_str("</div>");

    html.push_str("<div class=\"info-card\"><h3>Property Information</h3>");
    html.push_str(&info_row("Owner:", &p.owner));
    html.push_str(&info_row("Rights Type:", &p.property_type));
    html.push_str(&info_row("Zoning:", &p.zoning));
    html.push_str(&info_row("Year Acquired:", &p.year_acquired.to_string()));
    html.push_str(&format!(
        "<div class=\"info-row\"><span class=\"info-label\">Parcel ID:</span>\
         <span class=\"info-value mono\">{}</span></div>",
        p.id
    ));
    html.push_str("</div>");

    if let Some(og) = &p.oil_gas_info {
        html.push_str(&oil_gas_html(og));
    }

    html.push_str(
        "<div class=\"actions-card\"><h3>Quick Actions</h3><div class=\"actions-grid\">\
         <button class=\"action-btn act-blue\">Lease History</button>\
         <button class=\"action-btn act-green\">Production Report</button>\
         <button class=\"action-btn act-purple\">Well Records</button>\
         <button class=\"action-btn act-orange\">Title Research</button>\
         </div></div>",
    );
    html
}

fn oil_gas_html(og: &OilGasInfo) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"info-card oil-gas\"><h3>Oil &amp; Gas Information</h3>");
    html.push_str(&info_row("Play:", &og.play));
    html.push_str(&info_row("Formations:", &og.formations));
    html.push_str(&info_row("Active Wells:", &og.well_count.to_string()));
    html.push_str(&info_row("Royalty Rate:", &og.royalty_rate));
    html.push_str(&info_row("Lease Status:", &og.lease_status));
    html.push_str("</div>");
    html
}

fn info_row(label: &str, value: &str) -> String {
    format!(
        "<div class=\"info-row\"><span class=\"info-label\">{label}</span>\
         <span class=\"info-value\">{value}</span></div>"
    )
}

fn empty_html() -> String {
    "<div class=\"empty-state\">\
     <h3>Select an Energy Parcel</h3>\
     <p>Click on any parcel on the map to view detailed mineral rights, \
     lease information, and production data.</p>\
     <div class=\"demo-card\"><h4>Demo Features</h4><ul>\
     <li>Interactive map with SCOOP/STACK parcels</li>\
     <li>Oil &amp; gas lease data</li>\
     <li>Mineral rights ownership info</li>\
     <li>Formation and well count data</li>\
     <li>Royalty rate information</li>\
     </ul></div></div>"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OilGasInfo;

    fn parcel(oil_gas_info: Option<OilGasInfo>) -> Parcel {
        Parcel {
            id: "OK-2024-001".to_string(),
            boundary: vec![[35.0, -97.0], [35.1, -97.0], [35.1, -97.1]],
            address: "Section 14, T8N R4W, McClain County, OK".to_string(),
            owner: "Thunder Basin Energy LLC".to_string(),
            value: "$485,000".to_string(),
            size: "160 acres".to_string(),
            zoning: "Agricultural/Energy".to_string(),
            year_acquired: 2019,
            property_type: "Mineral Rights".to_string(),
            oil_gas_info,
        }
    }

    #[test]
    fn empty_selection_renders_the_placeholder() {
        let html = detail_html(None);
        assert!(html.contains("Select an Energy Parcel"));
        assert!(!html.contains("Property Information"));
    }

    #[test]
    fn selected_parcel_renders_every_attribute() {
        let html = detail_html(Some(&parcel(None)));
        for needle in [
            "Section 14, T8N R4W, McClain County, OK",
            "$485,000",
            "160 acres",
            "Thunder Basin Energy LLC",
            "Mineral Rights",
            "Agricultural/Energy",
            "2019",
            "OK-2024-001",
            "Quick Actions",
        ] {
            assert!(html.contains(needle), "missing {needle:?}");
        }
    }

    #[test]
    fn oil_gas_block_is_omitted_when_absent() {
        let html = detail_html(Some(&parcel(None)));
        assert!(!html.contains("Oil &amp; Gas Information"));
        assert!(!html.contains("Royalty Rate"));
    }

    #[test]
    fn oil_gas_block_is_rendered_when_present() {
        let html = detail_html(Some(&parcel(Some(OilGasInfo {
            play: "SCOOP (South Central Oklahoma Oil Province)".to_string(),
            formations: "Woodford Shale, Springer Formation".to_string(),
            well_count: 3,
            royalty_rate: "18.75%".to_string(),
            lease_status: "Active".to_string(),
        }))));
        assert!(html.contains("Oil &amp; Gas Information"));
        assert!(html.contains("Woodford Shale, Springer Formation"));
        assert!(html.contains("18.75%"));
        assert!(html.contains("Active"));
    }
}
