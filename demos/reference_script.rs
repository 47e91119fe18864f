use std::io::{self, Write};

use avl_index::Tree;

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut tree = Tree::new();
    for key in [42, -100, 61, 50, 63, 5, 777, 43, 0, 0] {
        tree.insert(key);
    }
    tree.print(&mut out)?;

    writeln!(out, "remove(42):")?;
    tree.remove(&42);
    tree.print(&mut out)?;

    writeln!(out, "remove(50):")?;
    tree.remove(&50);
    tree.print(&mut out)?;

    Ok(())
}
