//! Edge lists shared by the unit tests.

use crate::graph::CaveGraph;
use crate::parse::parse_edges;

pub const SMALL: &str = "start-A
start-b
A-c
A-b
b-d
A-end
b-end";

pub const MEDIUM: &str = "dc-end
HN-start
start-kj
dc-start
dc-HN
LN-dc
HN-end
kj-sa
kj-HN
kj-dc";

pub const LARGE: &str = "fs-end
he-DX
fs-he
start-DX
pj-DX
end-zg
zg-sl
zg-pj
pj-he
RW-he
fs-DX
pj-RW
zg-RW
start-pj
he-WI
zg-he
pj-fs
start-RW";

pub fn graph(input: &str) -> CaveGraph {
    parse_edges(input).expect("fixture parses")
}
