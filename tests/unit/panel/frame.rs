use super::*;

#[test]
fn parses_names_and_titles() {
    assert_eq!(FrameStyle::parse("PLAIN"), FrameStyle::Simple);
    assert_eq!(FrameStyle::parse("double"), FrameStyle::Double);
    assert_eq!(FrameStyle::parse("rounded"), FrameStyle::Rounded);
    assert_eq!(
        FrameStyle::parse("themed: Quantum Cat"),
        FrameStyle::Themed {
            title: "Quantum Cat".to_string()
        }
    );
    assert_eq!(FrameStyle::parse("zigzag"), FrameStyle::Simple);
}

#[test]
fn edges_have_the_requested_width() {
    let styles = [
        FrameStyle::Simple,
        FrameStyle::Double,
        FrameStyle::Rounded,
        FrameStyle::Themed {
            title: "A VERY LONG TITLE THAT DOES NOT FIT".to_string(),
        },
    ];
    for style in &styles {
        for width in [6, 7, 20, 50] {
            assert_eq!(style.top(width).chars().count(), width, "{style:?} {width}");
            assert_eq!(style.bottom(width).chars().count(), width);
            assert_eq!(style.row("xyz", width).chars().count(), width);
        }
    }
}

#[test]
fn themed_title_sits_in_the_top_edge() {
    let style = FrameStyle::Themed {
        title: "CAT".to_string(),
    };
    assert_eq!(style.top(11), "╔══ CAT ══╗");
    assert_eq!(style.bottom(11), "╚═════════╝");
}

#[test]
fn simple_row() {
    assert_eq!(FrameStyle::Simple.top(7), "+-----+");
    assert_eq!(FrameStyle::Simple.row("ab", 7), "| ab  |");
}
