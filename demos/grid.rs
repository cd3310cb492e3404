use clap::{Parser, ValueEnum};
use log::{info, warn};
use pathsearch::grid::{manhattan_distance, octile_distance, render, GridMap};
use pathsearch::{AStarSearcher, Heuristic, ZeroHeuristic};

#[derive(Parser)]
struct Options {
    #[arg(long, default_value_t = 10)]
    width: i32,
    #[arg(long, default_value_t = 10)]
    height: i32,
    /// Blocked cell as `x,y`. May be repeated; defaults to a wall between start and goal.
    #[arg(long = "obstacle", value_parser = parse_point)]
    obstacles: Vec<(i32, i32)>,
    #[arg(long, value_parser = parse_point, default_value = "0,0")]
    start: (i32, i32),
    #[arg(long, value_parser = parse_point, default_value = "6,0")]
    goal: (i32, i32),
    /// Allow diagonal moves.
    #[arg(long)]
    diagonal: bool,
    #[arg(long, value_enum, default_value_t = HeuristicKind::Manhattan)]
    heuristic: HeuristicKind,
}

#[derive(Copy, Clone, ValueEnum)]
enum HeuristicKind {
    Manhattan,
    Octile,
    Zero,
}

const DEFAULT_WALL: [(i32, i32); 8] = [
    (1, 1),
    (1, 2),
    (2, 2),
    (3, 2),
    (4, 2),
    (5, 2),
    (5, 1),
    (5, 0),
];

fn parse_point(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x coordinate: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y coordinate: {e}"))?;
    Ok((x, y))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opt = Options::parse();

    let mut map = if opt.diagonal {
        GridMap::eight_connected(opt.width, opt.height)
    } else {
        GridMap::four_connected(opt.width, opt.height)
    };

    let in_bounds =
        |&(x, y): &(i32, i32)| (0..opt.width).contains(&x) && (0..opt.height).contains(&y);
    let mut obstacles = if opt.obstacles.is_empty() {
        DEFAULT_WALL.to_vec()
    } else {
        opt.obstacles.clone()
    };
    obstacles.retain(|cell| {
        if !in_bounds(cell) {
            warn!("ignoring obstacle {cell:?} outside the map");
        }
        in_bounds(cell)
    });
    for &(x, y) in &obstacles {
        map.add_obstacle(x, y);
    }

    let heuristic: &dyn Heuristic<(i32, i32)> = match opt.heuristic {
        HeuristicKind::Manhattan => &manhattan_distance,
        HeuristicKind::Octile => &octile_distance,
        HeuristicKind::Zero => &ZeroHeuristic,
    };

    let mut searcher = AStarSearcher::with_capacity((opt.width * opt.height).max(0) as usize);

    println!("Finding path from {:?} to {:?}", opt.start, opt.goal);
    match searcher.search(opt.start, opt.goal, &map, heuristic) {
        Ok(path) => {
            println!("Path found with cost {:.2}:", path.cost);
            for (i, (x, y)) in path.nodes.iter().enumerate() {
                println!(" {i}: ({x}, {y})");
            }
            println!();
            println!("Grid Visualization:");
            print!("{}", render(&map, &path.nodes, opt.start, opt.goal));
        }
        Err(e) => println!("Error finding path: {e}"),
    }
    info!("{:?}", searcher.stats());

    let Some(&blocked) = obstacles.first() else {
        return;
    };
    println!();
    println!("Trying a case with no possible path, goal {blocked:?}:");
    match searcher.search(opt.start, blocked, &map, heuristic) {
        Ok(_) => println!("Error: found a path where none should exist."),
        Err(e) => println!("Correctly failed: {e}"),
    }
    info!("{:?}", searcher.stats());
}
