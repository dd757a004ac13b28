use crate::spectral::SpectralClass;
use crate::{RenderSink, RenderedStar, SkyMap, SkyMapError, SkyMapResult};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Writes the map as a standalone SVG document of size `2R × 2R`.
pub struct SvgRenderer<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> SvgRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Writer::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write(&mut self, event: Event<'_>) -> SkyMapResult<()> {
        self.writer
            .write_event(event)
            .map_err(|e| SkyMapError::Svg(e.to_string()))
    }

    fn write_document(&mut self, map: &SkyMap) -> SkyMapResult<()> {
        let size = (map.radius * 2.0).to_string();
        let mut svg = BytesStart::new("svg");
        svg.push_attribute(("xmlns", "http://www.w3.org/2000/svg"));
        svg.push_attribute(("width", size.as_str()));
        svg.push_attribute(("height", size.as_str()));
        svg.push_attribute(("viewBox", format!("0 0 {size} {size}").as_str()));
        self.write(Event::Start(svg))?;

        self.write_style()?;

        let r = map.radius.to_string();
        let mut disc = BytesStart::new("circle");
        disc.push_attribute(("cx", r.as_str()));
        disc.push_attribute(("cy", r.as_str()));
        disc.push_attribute(("r", r.as_str()));
        disc.push_attribute(("stroke", "white"));
        disc.push_attribute(("stroke-width", "1"));
        disc.push_attribute(("fill", "black"));
        self.write(Event::Empty(disc))?;

        for star in &map.stars {
            self.write_star(star, map)?;
        }
        self.write(Event::End(BytesEnd::new("svg")))
    }

    fn write_style(&mut self) -> SkyMapResult<()> {
        let mut css = String::from(
            ".proper-name { font: italic 1px sans-serif; stroke-width: 0.02px; stroke: black; }\n\
             .constellation { font: italic 0.2px sans-serif; stroke-width: 0.03px; }\n",
        );
        for class in SpectralClass::ALL {
            css.push_str(&format!(
                ".{} {{ fill: {} }}\n",
                class.css_class(),
                class.fill_color()
            ));
        }
        self.write(Event::Start(BytesStart::new("style")))?;
        self.write(Event::Text(BytesText::new(&css)))?;
        self.write(Event::End(BytesEnd::new("style")))
    }

    fn write_label(&mut self, start: BytesStart<'_>, text: &str) -> SkyMapResult<()> {
        self.write(Event::Start(start))?;
        self.write(Event::Text(BytesText::new(text)))?;
        self.write(Event::End(BytesEnd::new("text")))
    }

    fn write_star(&mut self, star: &RenderedStar, map: &SkyMap) -> SkyMapResult<()> {
        let (x, y) = (star.point.x, star.point.y);
        let class = star.class.css_class();

        if let Some(name) = &star.proper_name {
            let mut text = BytesStart::new("text");
            text.push_attribute(("x", coordinate(x + map.name_offset).as_str()));
            text.push_attribute(("y", coordinate(y - map.name_offset).as_str()));
            text.push_attribute(("class", format!("proper-name {class}").as_str()));
            self.write_label(text, name)?;
        }

        if star.circle_radius > 0.0 {
            let mut circle = BytesStart::new("circle");
            circle.push_attribute(("cx", coordinate(x).as_str()));
            circle.push_attribute(("cy", coordinate(y).as_str()));
            circle.push_attribute(("r", coordinate(star.circle_radius).as_str()));
            circle.push_attribute(("class", class));
            self.write(Event::Empty(circle))?;
        }

        if map.show_constellations {
            if let Some(abbreviation) = &star.constellation {
                let color = constellation_color(abbreviation);
                let mut text = BytesStart::new("text");
                text.push_attribute(("x", coordinate(x).as_str()));
                text.push_attribute(("y", coordinate(y).as_str()));
                text.push_attribute(("class", "constellation"));
                text.push_attribute(("fill", color));
                text.push_attribute(("stroke", color));
                self.write_label(text, abbreviation)?;
            }
        }
        Ok(())
    }
}

impl<W: Write> RenderSink for SvgRenderer<W> {
    fn render(&mut self, map: &SkyMap) -> SkyMapResult<()> {
        self.write_document(map)?;
        self.writer
            .get_mut()
            .flush()
            .map_err(|e| SkyMapError::io("<svg output>", e))
    }
}

fn coordinate(value: f64) -> String {
    format!("{value:.4}")
}

/// A few constellations get their own label color.
fn constellation_color(abbreviation: &str) -> &'static str {
    match abbreviation {
        "Dra" => "red",
        "UMa" => "green",
        "Her" => "blue",
        _ => "white",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DiscPoint, SkySummary};

    fn star(name: Option<&str>, radius: f64, constellation: Option<&str>) -> RenderedStar {
        RenderedStar {
            point: DiscPoint { x: 90.0, y: 45.0 },
            altitude: 45.0,
            azimuth: 270.0,
            circle_radius: radius,
            class: SpectralClass::A5,
            magnitude: 0.03,
            proper_name: name.map(str::to_owned),
            constellation: constellation.map(str::to_owned),
        }
    }

    fn map(stars: Vec<RenderedStar>, show_constellations: bool) -> SkyMap {
        SkyMap {
            radius: 90.0,
            name_offset: 0.5,
            show_constellations,
            julian_day: 2458397.0,
            lmst_degrees: 197.87,
            stars,
            summary: SkySummary::default(),
        }
    }

    fn render(map: &SkyMap) -> String {
        let mut renderer = SvgRenderer::new(Vec::new());
        renderer.render(map).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_empty_map_has_frame_and_styles() {
        let svg = render(&map(vec![], false));
        assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" "#));
        assert!(svg.contains(r#"width="180" height="180" viewBox="0 0 180 180">"#));
        assert!(svg.contains(
            r#"<circle cx="90" cy="90" r="90" stroke="white" stroke-width="1" fill="black"/>"#
        ));
        assert!(svg.contains(".O5 { fill: #9bb0ff }"));
        assert!(svg.contains(".M5 { fill: #ffcc6f }"));
        assert!(svg.contains(".default { fill: #ffffff }"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_star_circle_and_offset_label() {
        let svg = render(&map(vec![star(Some("Vega"), 0.35, None)], false));
        assert!(svg.contains(r#"<circle cx="90.0000" cy="45.0000" r="0.3500" class="A5"/>"#));
        assert!(svg.contains(
            r#"<text x="90.5000" y="44.5000" class="proper-name A5">Vega</text>"#
        ));
    }

    #[test]
    fn test_zero_radius_star_is_labelled_but_not_drawn() {
        let svg = render(&map(vec![star(Some("Dim"), 0.0, None)], false));
        assert!(svg.contains(">Dim</text>"));
        assert!(!svg.contains(r#"class="A5"/>"#));
    }

    #[test]
    fn test_constellation_labels_only_when_enabled() {
        let stars = vec![star(None, 0.2, Some("Dra"))];
        assert!(!render(&map(stars.clone(), false)).contains("Dra"));

        let svg = render(&map(stars, true));
        assert!(svg.contains(r#"class="constellation" fill="red" stroke="red">Dra</text>"#));
    }

    #[test]
    fn test_label_text_is_escaped() {
        let svg = render(&map(vec![star(Some("A<B & \"C\""), 0.1, None)], false));
        assert!(svg.contains(">A&lt;B &amp; &quot;C&quot;</text>"));

        let svg = render(&map(vec![star(Some("Barnard's"), 0.1, None)], false));
        assert!(svg.contains(">Barnard&apos;s</text>"));
        assert!(!svg.contains("Barnard's"));
    }

    #[test]
    fn test_output_is_well_formed_xml() {
        let stars = vec![
            star(Some("Vega & <Lyra>"), 0.35, Some("Lyr")),
            star(None, 0.0, Some("UMa")),
        ];
        let svg = render(&map(stars, true));

        let mut reader = quick_xml::Reader::from_str(&svg);
        let mut depth = 0i32;
        let mut texts = 0;
        loop {
            match reader.read_event().unwrap() {
                Event::Start(_) => depth += 1,
                Event::End(_) => depth -= 1,
                Event::Text(t) if depth == 2 => {
                    texts += 1;
                    assert!(!t.unescape().unwrap().is_empty());
                }
                Event::Eof => break,
                _ => {}
            }
        }
        assert_eq!(depth, 0);
        // style block, one name label, two constellation labels
        assert_eq!(texts, 4);
    }
}
