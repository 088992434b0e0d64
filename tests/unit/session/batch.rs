use super::*;
use crate::session::render::render;

fn requests() -> Vec<RenderRequest> {
    ["quantum", "blockchain", "cyber", "schrodinger", "generic", "mystery"]
        .iter()
        .map(|c| RenderRequest {
            traits: PartialTraitDescriptor::default().with_category(*c),
            entropy: None,
        })
        .collect()
}

#[test]
fn zero_threads_is_rejected() {
    let opts = BatchOpts {
        threads: Some(0),
        render: RenderOpts::default(),
    };
    let err = render_many(&requests(), SurfaceSize::new(16, 16), &opts).unwrap_err();
    assert!(matches!(err, ForgeError::Validation(_)));
}

#[test]
fn batch_matches_sequential_in_order() {
    let size = SurfaceSize::new(40, 40);
    let reqs = requests();
    let opts = BatchOpts {
        threads: Some(3),
        render: RenderOpts::default(),
    };
    let batch = render_many(&reqs, size, &opts).unwrap();
    let sequential: Vec<RenderHandle> = reqs
        .iter()
        .map(|r| render(&r.traits, r.entropy.as_ref(), size))
        .collect();
    assert_eq!(batch, sequential);
}

#[test]
fn failed_requests_stay_in_place() {
    let opts = BatchOpts {
        threads: Some(2),
        render: RenderOpts::default(),
    };
    let out = render_many(&requests(), SurfaceSize::new(0, 0), &opts).unwrap();
    assert_eq!(out.len(), 6);
    assert!(out.iter().all(RenderHandle::is_empty));
}

#[test]
fn request_envelope_parses_from_json() {
    let req: RenderRequest = serde_json::from_str(
        r#"{"traits": {"category": "Cyber", "rarityTier": "epic"}, "entropy": {"blockHeight": "12"}}"#,
    )
    .unwrap();
    assert_eq!(req.traits.category.as_deref(), Some("Cyber"));
    assert_eq!(req.entropy.and_then(|e| e.block_height), Some(12));
}

#[test]
fn malformed_envelope_fields_read_as_absent() {
    for body in [
        r#"{"traits": null, "entropy": 5}"#,
        r#"{"traits": "cyber", "entropy": null}"#,
        r#"{"traits": [1, 2], "entropy": ["12"]}"#,
    ] {
        let req: RenderRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req, RenderRequest::default(), "{body}");
    }

    let req: RenderRequest =
        serde_json::from_str(r#"{"traits": {"category": "quantum"}, "entropy": false}"#).unwrap();
    assert_eq!(req.traits.category.as_deref(), Some("quantum"));
    assert!(req.entropy.is_none());
}
