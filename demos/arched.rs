fn main() {
    // Arched window: the chord bar lands on the inner springline and the
    // four remaining bars spread evenly below it.
    let mut spec = fenestra::WindowSpec::new(1000.0, 1400.0, 70.0);
    spec.arch_height = 250.0;
    spec.vertical_bars = 3;
    spec.horizontal_bars = 4;
    spec.sash_bar_width = 35.0;
    spec.center_bar_width = Some(60.0);
    spec.horizontal_mode = fenestra::HorizontalMode::FromChord;

    match fenestra::render(&spec) {
        Ok(svg) => println!("{}", svg),
        Err(e) => eprintln!("Error: {}", e),
    }
}
