use clap::Parser;
use gol_arena::{LifeEngine, SeedPattern};

#[derive(Parser, Debug)]
#[command(version, about)]
struct CLIParser {
    /// Seed pattern placed at the grid center
    #[arg(short, long, value_enum, default_value_t = SeedPattern::Glider)]
    pattern: SeedPattern,

    /// Grid width in cells
    #[arg(long, default_value_t = 64)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 32)]
    height: usize,

    /// Number of generations to simulate
    #[arg(short, long, default_value_t = 16)]
    generations: u64,

    /// Fill the grid with a random soup of this density instead of a pattern
    #[arg(short, long)]
    soup: Option<f64>,

    /// Seed for the soup generator, random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Print the grid after every generation instead of only the final one
    #[arg(short, long)]
    all_frames: bool,
}

fn main() {
    let args = CLIParser::parse();

    let mut engine = LifeEngine::new(args.width, args.height).unwrap();
    match args.soup {
        Some(density) => engine.load_soup(density, args.seed),
        None => engine.load_pattern(args.pattern),
    }
    println!("Generation 0, population {}", engine.population());
    if args.all_frames {
        print_frame(&engine);
    }

    let timer = std::time::Instant::now();
    for generation in 1..=args.generations {
        engine.step();
        if args.all_frames {
            println!("Generation {}, population {}", generation, engine.population());
            print_frame(&engine);
        }
    }
    println!(
        "Simulated {} generations in {:.3} secs",
        args.generations,
        timer.elapsed().as_secs_f64()
    );

    if !args.all_frames {
        println!(
            "Generation {}, population {}",
            args.generations,
            engine.population()
        );
        print_frame(&engine);
    }
}

fn print_frame(engine: &LifeEngine) {
    let (width, height) = engine.grid().dimensions();
    let mut frame = String::with_capacity((width + 1) * height);
    for y in 0..height {
        for x in 0..width {
            frame.push(if engine.grid().is_alive(x, y).unwrap() {
                '#'
            } else {
                '.'
            });
        }
        frame.push('\n');
    }
    print!("{}", frame);
}
