use list_sketch::render::DisplayList;
use list_sketch::sketch::{Event, Sketch};

fn press(sketch: &mut Sketch, event: Event) {
    match sketch.handle(&event) {
        Ok(()) => println!("{:?} -> {}", event, sketch.list()),
        Err(error) => println!("{event:?} rejected: {error}"),
    }
}

fn main() {
    let mut sketch = Sketch::new();
    println!("seeded: {}", sketch.list());

    press(&mut sketch, Event::Insert {
        value: "9".into(),
        index: "10".into(),
    });
    press(&mut sketch, Event::Remove {
        index: "2".into(),
    });
    press(&mut sketch, Event::Insert {
        value: "nine".into(),
        index: "".into(),
    });
    press(&mut sketch, Event::Remove {
        index: "-1".into(),
    });

    let mut frame = DisplayList::new();
    sketch.frame(&mut frame);
    println!("\nframe ({} commands):", frame.commands().len());
    for command in frame.commands() {
        println!("  {command:?}");
    }
}
