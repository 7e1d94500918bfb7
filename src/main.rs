#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::process::ExitCode;
use std::time::Instant;

use life_board::cli::{self, CliArgs};
use life_board::session::{Key, Session};

const CHECKPOINTS: u64 = 10;

fn run(args: CliArgs) -> ExitCode {
    let topology = args.session.topology;
    let mut session = Session::new(args.session);
    let Some(size) = session.board().map(|b| b.size()) else {
        log::error!("no board to simulate");
        return ExitCode::FAILURE;
    };

    let interval = (args.generations / CHECKPOINTS).max(1);
    session.handle_key(Key::Char('s'));

    let start = Instant::now();
    for generation in 1..=args.generations {
        session.tick();
        if generation % interval == 0 || generation == args.generations {
            let population = session.board().map_or(0, |b| b.population());
            log::info!("generation {generation}: population {population}");
        }
    }
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let avg_ms = if args.generations > 0 {
        elapsed_ms / args.generations as f64
    } else {
        0.0
    };
    println!(
        "{size}x{size} {} board, {} generations: {elapsed_ms:.3} ms total, {avg_ms:.6} ms/gen",
        topology.name(),
        args.generations
    );

    if args.print {
        print!("{}", session.render_text());
    }
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    env_logger::init();

    match cli::parse_args(std::env::args().skip(1)) {
        Ok(args) => run(args),
        Err(err) => {
            eprintln!("{err}\n{}", cli::USAGE);
            ExitCode::from(2)
        }
    }
}
