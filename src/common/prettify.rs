//! Basic pretty printing facilities

use pretty::{DocAllocator, DocBuilder, RcAllocator};

/// Width at which rendered documents wrap
const WIDTH: usize = 80;

pub trait ToPretty {
    fn pretty<'b, D, A>(&'b self, allocator: &'b D) -> DocBuilder<'b, D, A>
    where
        D: DocAllocator<'b, A>,
        D::Doc: Clone,
        A: Clone;
}

/// Render anything pretty-printable to a string with no trailing
/// newline
pub fn prettify<I>(expr: &I) -> String
where
    I: ToPretty,
{
    let allocator = RcAllocator;
    let doc = expr.pretty::<_, ()>(&allocator);
    let mut w = String::new();
    doc.1
        .render_fmt(WIDTH, &mut w)
        .expect("rendering into a String cannot fail");
    w
}
