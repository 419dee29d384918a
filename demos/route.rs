//! Interactive router: reads start, goal and obstacles from stdin, adds some random obstacles
//! and prints the map before and after routing.
//!
//! ```no_code
//! cargo run --example route
//! ```

use env_logger::Env;
use nanorand::WyRand;
use std::io::{self, BufRead, Write};
use terrain_pathfinding::{prelude::*, scenario::check_endpoint};

const RANDOM_OBSTACLES: usize = 10;

/// Parses exactly `N` whitespace separated numbers.
fn parse_numbers<const N: usize>(line: &str) -> Option<[usize; N]> {
    let mut numbers = [0; N];
    let mut words = line.split_whitespace();
    for number in numbers.iter_mut() {
        *number = words.next()?.parse().ok()?;
    }
    words.next().is_none().then_some(numbers)
}

/// Asks until `parse` accepts the answer. Returns `None` once the input ends.
fn ask<T>(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    question: &str,
    mut parse: impl FnMut(&str) -> Result<T, String>,
) -> Option<T> {
    loop {
        print!("{}: ", question);
        io::stdout().flush().ok()?;
        let line = lines.next()?.ok()?;
        match parse(line.trim()) {
            Ok(value) => return Some(value),
            Err(reason) => println!("Invalid input ({}), please try again.", reason),
        }
    }
}

fn ask_endpoint(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    grid: &Grid,
    name: &str,
) -> Option<Coord> {
    ask(lines, &format!("{} (row col)", name), |line| {
        let [row, col] = parse_numbers::<2>(line).ok_or("expected two numbers")?;
        check_endpoint(grid, (row, col))
            .map(|()| (row, col))
            .map_err(|err| err.to_string())
    })
}

fn main() {
    let env = Env::default().filter_or("MY_LOG_LEVEL", "warn");
    env_logger::Builder::from_env(env).init();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let grid = Grid::default();

    let Some(start) = ask_endpoint(&mut lines, &grid, "Start") else {
        return;
    };
    let Some(goal) = ask_endpoint(&mut lines, &grid, "Goal") else {
        return;
    };
    let mut scenario = match Scenario::new(grid, start, goal) {
        Ok(scenario) => scenario,
        Err(err) => {
            eprintln!("{}", err);
            return;
        }
    };

    loop {
        let added = ask(
            &mut lines,
            "Obstacle (row col class, 1-3), empty line to finish",
            |line| {
                if line.is_empty() {
                    return Ok(false);
                }
                let [row, col, class] = parse_numbers::<3>(line).ok_or("expected three numbers")?;
                let class = u8::try_from(class).map_err(|err| err.to_string())?;
                scenario
                    .add_obstacle((row, col), Terrain(class))
                    .map(|()| true)
                    .map_err(|err| err.to_string())
            },
        );
        if added != Some(true) {
            break;
        }
    }

    let mut rng = WyRand::new();
    if let Err(err) = scenario.scatter_obstacles(RANDOM_OBSTACLES, &mut rng) {
        eprintln!("{}", err);
        return;
    }

    println!("Map with obstacles:");
    print!("{}", scenario.grid());

    match scenario.find_path(&Pathfinder::default()) {
        Ok(path) if path.is_reachable() => {
            println!("Map with obstacles and the cheapest route:");
            print!("{}", GridView::new(scenario.grid()).with_path(&path));
            println!("{}", path);
        }
        Ok(_) => println!("The goal {:?} cannot be reached from {:?}.", goal, start),
        Err(err) => eprintln!("{}", err),
    }
}
