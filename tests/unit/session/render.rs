use super::*;
use crate::export::png::decode_png;
use crate::session::handle::ExportFormat;

fn quantum_cat() -> PartialTraitDescriptor {
    PartialTraitDescriptor::default()
        .with_category("quantum")
        .with_rarity("rare")
}

#[test]
fn render_reports_requested_size() {
    let h = render(&quantum_cat(), None, SurfaceSize::new(64, 48));
    assert!(!h.is_empty());
    assert_eq!((h.width(), h.height()), (64, 48));
    let decoded = decode_png(&h.to_image_bytes(ExportFormat::Raster)).unwrap();
    assert_eq!((decoded.width, decoded.height), (64, 48));
}

#[test]
fn unavailable_surface_gives_empty_handle() {
    for size in [SurfaceSize::new(0, 10), SurfaceSize::new(70_000, 8)] {
        let h = render(&quantum_cat(), None, size);
        assert!(h.is_empty());
        assert!(try_render(&quantum_cat(), None, size, &RenderOpts::default()).is_err());
    }
}

#[test]
fn empty_descriptor_still_renders() {
    let h = render(&PartialTraitDescriptor::default(), None, SurfaceSize::new(32, 32));
    assert!(!h.is_empty());
    assert!(!h.draw_log().is_empty());
}

#[test]
fn entropy_changes_the_image() {
    let entropy = EntropyInput::default()
        .with_block_height(840_000)
        .with_block_hash("0x00000000000000000002a7c4c1e48d76c5a37902165a270156b7a8d72728a054");
    let size = SurfaceSize::new(64, 64);
    let plain = render(&quantum_cat(), None, size);
    let chained = render(&quantum_cat(), Some(&entropy), size);
    assert_ne!(plain.frame(), chained.frame());
}

#[test]
fn panel_lines_have_requested_width() {
    let opts = PanelOpts {
        width: 36,
        ..PanelOpts::default()
    };
    let panel = render_panel(&quantum_cat(), None, &opts);
    assert!(panel.lines().all(|l| l.chars().count() == 36));
}

#[test]
fn advanced_panel_lines_have_requested_width() {
    let panel = render_advanced_panel(&quantum_cat(), None, 60);
    assert!(panel.lines().count() > 3);
    assert!(panel.lines().all(|l| l.chars().count() == 60));
}
