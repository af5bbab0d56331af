use grid_route_planning::{
    plan_route, replay, CellStatus, GreedyLookahead, Pathfinder, ReplayStep, RouteGrid,
};
use grid_util::Point;

// Plans a route, then replays it over the grid while printing each status
// transition and the rendered grid at the end. A real front end would hook
// its renderer into the same sink.
fn main() {
    let mut grid = RouteGrid::create(8, 6).unwrap();
    let origin = Point::new(0, 0);
    let targets = [Point::new(7, 0), Point::new(3, 5), Point::new(6, 4)];
    grid.set_status(origin, CellStatus::Origin).unwrap();
    for &t in &targets {
        grid.set_status(t, CellStatus::Target).unwrap();
    }
    let route = plan_route(&grid, &Pathfinder::new(), &GreedyLookahead, origin, &targets)
        .expect("all targets reachable");

    let mut sink = |step: ReplayStep| {
        println!(
            "{} {:?} -> {:?} (cost so far: {})",
            step.position, step.from, step.to, step.running_cost
        );
    };
    replay(&mut grid, &route, &mut sink).unwrap();
    println!("\n{}", grid);
    println!("Total cost: {}", route.total_cost);
}
