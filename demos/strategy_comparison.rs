use grid_route_planning::{plan_route, ExhaustiveSearch, GreedyLookahead, Pathfinder, RouteGrid};
use grid_util::Point;

// Plans the same target set with both strategies. The greedy lookahead is
// fast but heuristic; the exhaustive search finds the provably cheapest
// visit order and never costs more.
fn main() {
    let grid = RouteGrid::create(10, 10).unwrap();
    let origin = Point::new(0, 0);
    let targets = [
        Point::new(9, 0),
        Point::new(1, 2),
        Point::new(4, 8),
        Point::new(9, 9),
        Point::new(0, 6),
    ];
    let pathfinder = Pathfinder::new();
    for (name, route) in [
        (
            "greedy",
            plan_route(&grid, &pathfinder, &GreedyLookahead, origin, &targets).unwrap(),
        ),
        (
            "exhaustive",
            plan_route(&grid, &pathfinder, &ExhaustiveSearch, origin, &targets).unwrap(),
        ),
    ] {
        let order: Vec<String> = route.visits.iter().map(|v| v.target.to_string()).collect();
        println!(
            "{name}: cost {}, {} steps, order {}",
            route.total_cost,
            route.path.len() - 1,
            order.join(" -> ")
        );
    }
}
