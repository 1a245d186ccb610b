fn main() {
    // Classic four-over-two rectangular window
    let mut spec = fenestra::WindowSpec::new(800.0, 1200.0, 60.0);
    spec.vertical_bars = 3;
    spec.horizontal_bars = 2;
    spec.sash_bar_width = 30.0;
    spec.center_bar_width = Some(50.0);

    match fenestra::render(&spec) {
        Ok(svg) => println!("{}", svg),
        Err(e) => eprintln!("Error: {}", e),
    }
}
