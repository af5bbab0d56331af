use grid_route_planning::{plan_route, GreedyLookahead, Pathfinder, RouteGrid};
use grid_util::Point;

// In this example a route is planned on a 5x5 grid with a single target
// two cells to the right of the origin. The visit is charged 2 steps of
// travel plus the target's initial pending weight of 1.
fn main() {
    let grid = RouteGrid::create(5, 5).unwrap();
    let origin = Point::new(0, 0);
    let target = Point::new(2, 0);
    let route = plan_route(&grid, &Pathfinder::new(), &GreedyLookahead, origin, &[target])
        .expect("target is reachable");
    println!("Total cost: {}", route.total_cost);
    for p in route.path {
        println!("{:?}", p);
    }
}
