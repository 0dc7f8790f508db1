//! Example: Running the mapping flow against an in-memory host
//!
//! This example demonstrates how to wire the coordinator to a host: a
//! document with three artboards and one selected quadrilateral shape, a
//! picker scripted to choose the second option, and a perspective engine
//! that reports what it would render.

use std::rc::Rc;

use quadfill::{
    Artboard, ArtboardChooser, ChooserResponse, Document, HostContext, MappingOutcome,
    MappingRequest, Messenger, PerspectiveEngine, SelectionCoordinator, Shape,
    config::AppConfig,
};
use quadfill_core::geometry::Point;
use quadfill_core::path::{Path, PathCommand};

struct DemoArtboard {
    name: &'static str,
}

impl Artboard for DemoArtboard {
    fn name(&self) -> String {
        self.name.to_string()
    }
}

struct MockupShape {
    corners: [Point; 4],
}

impl Shape for MockupShape {
    fn boundary_points(&self) -> Vec<Point> {
        // The host reports a closed quadrilateral as the corner sequence
        // followed by the closing run back to the start.
        let [c0, c1, c2, c3] = self.corners;
        vec![c0, c1, c2, c3, c0, c0, c0]
    }

    fn outline(&self) -> Path {
        let [c0, c1, c2, c3] = self.corners;
        Path::new(vec![
            PathCommand::MoveTo(c0),
            PathCommand::LineTo(c1),
            PathCommand::LineTo(c2),
            PathCommand::LineTo(c3),
            PathCommand::LineTo(c0),
            PathCommand::ClosePath,
        ])
    }
}

struct DemoDocument {
    selected: Rc<dyn Shape>,
}

impl Document for DemoDocument {
    fn selection(&self) -> Option<Vec<Rc<dyn Shape>>> {
        Some(vec![Rc::clone(&self.selected)])
    }

    fn artboards(&self) -> Vec<Rc<dyn Artboard>> {
        ["Home", "About", "Contact"]
            .into_iter()
            .map(|name| Rc::new(DemoArtboard { name }) as Rc<dyn Artboard>)
            .collect()
    }
}

/// A picker scripted to confirm a fixed option.
struct ScriptedChooser {
    pick: usize,
}

impl ArtboardChooser for ScriptedChooser {
    fn present(&self, options: &[String]) -> ChooserResponse {
        println!("Picker shows: {options:?}");
        println!("User picks: {}", options[self.pick]);
        ChooserResponse::confirmed(self.pick)
    }
}

struct ConsoleMessenger;

impl Messenger for ConsoleMessenger {
    fn show_message(&self, text: &str) {
        println!("[host message] {text}");
    }
}

struct DemoOutcome {
    artboard_name: String,
}

impl MappingOutcome for DemoOutcome {
    fn add_image_fill(self: Box<Self>) {
        println!(
            "Applying perspective-mapped image fill of \"{}\"",
            self.artboard_name
        );
    }
}

struct DemoEngine;

impl PerspectiveEngine for DemoEngine {
    fn angle_for(&self, request: MappingRequest) -> Option<Box<dyn MappingOutcome>> {
        Some(Box::new(DemoOutcome {
            artboard_name: request.artboard().name(),
        }))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Configuration the way a host plugin would ship it.
    let config: AppConfig = toml::from_str(
        r#"
        [validation]
        detect_self_intersection = true
        detect_duplicate_points = true
        duplicate_epsilon = 0.001
        "#,
    )?;

    // A slightly skewed quadrilateral, as drawn over a phone mockup.
    let shape = Rc::new(MockupShape {
        corners: [
            Point::new(102.0, 48.0),
            Point::new(318.0, 63.0),
            Point::new(310.0, 420.0),
            Point::new(95.0, 396.0),
        ],
    });

    let document = DemoDocument { selected: shape };
    let chooser = ScriptedChooser { pick: 1 };
    let engine = DemoEngine;
    let messenger = ConsoleMessenger;

    let host = HostContext::new(&document, &chooser, &engine, &messenger);
    let outcome = SelectionCoordinator::new(config).run(&host);

    println!("Run finished: {outcome:?}");
    Ok(())
}
