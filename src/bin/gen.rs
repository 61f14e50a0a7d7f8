use clap::Parser;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value_t = 5)]
    atoms: usize,
    #[arg(long, default_value_t = 8)]
    clauses: usize,
    #[arg(long, default_value_t = 3)]
    max_width: usize,
    #[arg(long, default_value_t = 0.5)]
    negation_rate: f64,
    #[arg(long)]
    seed: Option<u64>,
}

// Generate one clause of 1..=max_width distinct atoms over x0..x{atoms-1}.
fn generate_clause(args: &Args, rng: &mut StdRng) -> String {
    let mut atoms: Vec<usize> = (0..args.atoms).collect();
    atoms.shuffle(rng);

    let width = rng.gen_range(1..=args.max_width.clamp(1, args.atoms));
    let literals: Vec<String> = atoms[..width]
        .iter()
        .map(|a| {
            if rng.gen_bool(args.negation_rate) {
                format!("~x{}", a)
            } else {
                format!("x{}", a)
            }
        })
        .collect();

    literals.join(" v ")
}

fn main() {
    let args = Args::parse();
    if args.atoms == 0 || !(0.0..=1.0).contains(&args.negation_rate) {
        eprintln!("need at least one atom and a negation rate within [0, 1]");
        std::process::exit(2);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!("# {} random clauses over {} atoms; the last line is the goal", args.clauses + 1, args.atoms);
    for _ in 0..args.clauses {
        println!("{}", generate_clause(&args, &mut rng));
    }
    println!("{}", generate_clause(&args, &mut rng));
}
