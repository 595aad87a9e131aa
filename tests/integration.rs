use frontend_architect::{
    build_multimodal_request, build_request, design, extract_html, parse_design_decisions,
    prompts, GenerationOverrides, InlineData, MediaResolution, Part, RequestOptions,
};
use pretty_assertions::assert_eq;

/// A plausible model response: decision block first, then the document fence.
const SAMPLE_RESPONSE: &str = "\
Here is the design.

```
ARCHETYPE: Luxury/Editorial — an unhurried, high-contrast treatment
FONTS: Fraunces + Plus Jakarta Sans
PALETTE: #FEFDFB / #0A0A0A / #DC2626 (hex values)
LAYOUT: Scroll-driven storytelling with a 7/5 asymmetric hero
```

```html
<!DOCTYPE html>
<html lang=\"en\">
<head><title>Atelier</title></head>
<body><main>Editorial landing</main></body>
</html>
```

Let me know if you want the palette warmed up.
";

#[test]
fn test_request_round_trip_shape() {
    let request = build_request("Create a pricing page for SaaS", &RequestOptions::default());
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["model"], "gemini-3-pro-preview");
    assert_eq!(
        value["systemInstruction"]["parts"][0]["text"],
        prompts::FRONTEND_ARCHITECT
    );
    assert_eq!(value["contents"][0]["role"], "user");
    assert_eq!(
        value["contents"][0]["parts"][0]["text"],
        "Create a pricing page for SaaS"
    );
    assert_eq!(value["generationConfig"]["temperature"], 0.8);
    assert_eq!(
        value["safetySettings"][0]["category"],
        "HARM_CATEGORY_HARASSMENT"
    );
}

#[test]
fn test_multimodal_flow_from_raw_bytes() {
    // Caller starts from raw sketch bytes, encodes, then overrides the
    // forced resolution hint.
    let inline = InlineData::from_bytes(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A]);
    assert_eq!(inline.mime_type, "image/png");

    let options = RequestOptions {
        generation: GenerationOverrides {
            media_resolution: Some(MediaResolution::Low),
            ..Default::default()
        },
        ..Default::default()
    };
    let request = build_multimodal_request(
        "Convert this wireframe sketch into a polished landing page",
        &inline.data,
        Some(&inline.mime_type),
        &options,
    );

    assert!(matches!(
        &request.contents[0].parts[0],
        Part::InlineData { .. }
    ));
    assert_eq!(
        request.generation_config.media_resolution,
        Some(MediaResolution::Low)
    );
}

#[test]
fn test_parse_full_response() {
    let html = extract_html(SAMPLE_RESPONSE).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.ends_with("</html>"));

    let decisions = parse_design_decisions(SAMPLE_RESPONSE);
    assert_eq!(
        decisions.fonts.as_deref(),
        Some("Fraunces + Plus Jakarta Sans")
    );
    assert_eq!(
        decisions.layout.as_deref(),
        Some("Scroll-driven storytelling with a 7/5 asymmetric hero")
    );

    // Parsed archetype resolves against the static table.
    let archetype = design::find_archetype(decisions.archetype.as_deref().unwrap()).unwrap();
    assert_eq!(archetype.name, "Luxury/Editorial");
    assert!(archetype.fonts.contains(&"Fraunces"));
}

#[test]
fn test_parsers_accept_unrelated_response() {
    let response = "I need more detail about the product before designing.";
    assert_eq!(extract_html(response), None);
    assert_eq!(
        parse_design_decisions(response),
        frontend_architect::DesignDecisions::default()
    );
}
