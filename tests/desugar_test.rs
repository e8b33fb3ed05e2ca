//! Desugar sugared programs and check their behaviour by running
//! the resulting core
use whilec::core::error::CoreError;
use whilec::core::export::quote::quote_program;
use whilec::core::expr::acore::*;
use whilec::core::expr::{HasNames, Program};
use whilec::core::name::Name;
use whilec::core::tree::Tree;
use whilec::core::unquote::unquote_program;
use whilec::driver::error::WhileError;
use whilec::driver::source::ProgramSet;
use whilec::eval;
use whilec::syntax::ast::{asugar, SugarCommand, SugarProgram};
use whilec::syntax::macros::MacroError;

fn n(file: &str, text: &str) -> Name {
    Name::new(file, text)
}

/// A program in `file` reading `X` and writing `Y`
fn program(file: &str, body: SugarCommand) -> SugarProgram {
    SugarProgram::new(n(file, file), n(file, "X"), body, var(&n(file, "Y")))
}

fn translate(programs: Vec<SugarProgram>, root: &str) -> Program {
    ProgramSet::from_programs(programs)
        .unwrap()
        .translate(root)
        .unwrap()
}

fn run(p: &Program, input: Tree) -> Tree {
    let output = eval::run(p, input.clone()).unwrap();

    // the encoded program behaves the same once decoded
    if let Ok(quoted) = quote_program(p) {
        let decoded = unquote_program(p.file(), &quoted).unwrap();
        assert_eq!(quote_program(&decoded).unwrap(), quoted);
        assert_eq!(eval::run(&decoded, input).unwrap(), output);
    }

    output
}

fn t(k: usize) -> Tree {
    Tree::from_nat(k)
}

#[test]
pub fn test_if_else_selects_branch() {
    let x = n("main", "X");
    let y = n("main", "Y");
    let p = translate(
        vec![program(
            "main",
            asugar::if_else(var(&x), asugar::assign(&y, nat(1)), asugar::assign(&y, nat(2))),
        )],
        "main",
    );
    assert!(p.is_pure());
    assert_eq!(run(&p, Tree::nil()), t(2));
    assert_eq!(run(&p, t(7)), t(1));
}

#[test]
pub fn test_guard_evaluated_once() {
    // the true branch falsifies the guard but the else branch must
    // still not run
    let x = n("main", "X");
    let y = n("main", "Y");
    let p = translate(
        vec![program(
            "main",
            asugar::seq(vec![
                asugar::assign(&y, nat(4)),
                asugar::if_else(
                    var(&x),
                    asugar::assign(&x, nil()),
                    asugar::assign(&y, nat(5)),
                ),
            ]),
        )],
        "main",
    );
    assert_eq!(run(&p, t(1)), t(4));
    assert_eq!(run(&p, Tree::nil()), t(5));
}

#[test]
pub fn test_nested_if_else() {
    let x = n("main", "X");
    let y = n("main", "Y");
    let p = translate(
        vec![program(
            "main",
            asugar::if_else(
                var(&x),
                asugar::seq(vec![
                    asugar::assign(&x, tl(var(&x))),
                    asugar::if_else(
                        var(&x),
                        asugar::assign(&y, nat(1)),
                        asugar::assign(&y, nat(2)),
                    ),
                    // the outer frame is intact after the inner conditional
                    asugar::assign(&y, cons(var(&y), nil())),
                ]),
                asugar::assign(&y, nat(3)),
            ),
        )],
        "main",
    );
    assert_eq!(run(&p, t(2)), Tree::pair(t(1), Tree::nil()));
    assert_eq!(run(&p, t(1)), Tree::pair(t(2), Tree::nil()));
    assert_eq!(run(&p, t(0)), t(3));
}

#[test]
pub fn test_if_else_inside_while() {
    // count the odd positions of the input list
    let x = n("main", "X");
    let y = n("main", "Y");
    let odd = n("main", "ODD");
    let p = translate(
        vec![program(
            "main",
            asugar::seq(vec![
                asugar::assign(&odd, nat(1)),
                asugar::while_(
                    var(&x),
                    asugar::seq(vec![
                        asugar::if_else(
                            var(&odd),
                            asugar::seq(vec![
                                asugar::assign(&y, cons(nil(), var(&y))),
                                asugar::assign(&odd, nil()),
                            ]),
                            asugar::assign(&odd, nat(1)),
                        ),
                        asugar::assign(&x, tl(var(&x))),
                    ]),
                ),
            ]),
        )],
        "main",
    );
    assert_eq!(run(&p, Tree::from_list(vec![t(9); 5])), t(3));
}

fn switch_program() -> Program {
    let x = n("main", "X");
    let y = n("main", "Y");
    translate(
        vec![program(
            "main",
            asugar::switch(
                var(&x),
                vec![
                    (nil(), asugar::assign(&y, nat(0))),
                    (lit(Tree::pair(Tree::nil(), Tree::nil())), asugar::assign(&y, nat(1))),
                    (nat(1), asugar::assign(&y, nat(2))),
                ],
                asugar::assign(&y, nat(3)),
            ),
        )],
        "main",
    )
}

#[test]
pub fn test_switch_first_arm() {
    assert_eq!(run(&switch_program(), Tree::nil()), t(0));
}

#[test]
pub fn test_switch_guards_are_not_encodable() {
    assert!(matches!(
        quote_program(&switch_program()),
        Err(CoreError::Unencodable(_))
    ));
}

#[test]
pub fn test_switch_duplicate_case_takes_first() {
    // <nil.nil> and 1 are the same tree
    assert_eq!(run(&switch_program(), t(1)), t(1));
}

#[test]
pub fn test_switch_default() {
    assert_eq!(run(&switch_program(), t(5)), t(3));
}

/// `add read X { Y := hd X; Z := tl X; while Z { Y := cons nil Y; Z := tl Z } } write Y`
fn add() -> SugarProgram {
    let x = n("add", "X");
    let y = n("add", "Y");
    let z = n("add", "Z");
    program(
        "add",
        asugar::seq(vec![
            asugar::assign(&y, hd(var(&x))),
            asugar::assign(&z, tl(var(&x))),
            asugar::while_(
                var(&z),
                asugar::seq(vec![
                    asugar::assign(&y, cons(nil(), var(&y))),
                    asugar::assign(&z, tl(var(&z))),
                ]),
            ),
        ]),
    )
}

#[test]
pub fn test_macro_behaves_as_callee() {
    // double X by calling add on <X.X>
    let x = n("main", "X");
    let y = n("main", "Y");
    let z = n("main", "Z");
    let p = translate(
        vec![
            add(),
            program(
                "main",
                asugar::seq(vec![
                    asugar::assign(&z, nat(9)),
                    asugar::macro_call(&y, "add", cons(var(&x), var(&x))),
                ]),
            ),
        ],
        "main",
    );
    let add_alone = translate(vec![add()], "add");
    assert_eq!(
        run(&p, t(3)),
        run(&add_alone, Tree::pair(t(3), t(3)))
    );
    assert_eq!(run(&p, t(3)), t(6));

    // the caller's Z and the callee's Z stay distinct
    let names = p.names();
    assert!(names.contains(&z));
    assert!(names.contains(&n("add", "Z")));
}

#[test]
pub fn test_nested_macros_and_conditionals() {
    // main calls twice which calls add twice, all guarded by if/else
    let tx = n("twice", "X");
    let ty = n("twice", "Y");
    let twice = program(
        "twice",
        asugar::if_else(
            var(&tx),
            asugar::seq(vec![
                asugar::macro_call(&ty, "add", cons(var(&tx), var(&tx))),
                asugar::macro_call(&ty, "add", cons(var(&ty), var(&ty))),
            ]),
            asugar::assign(&ty, nat(100)),
        ),
    );
    let x = n("main", "X");
    let y = n("main", "Y");
    let main = program("main", asugar::macro_call(&y, "twice", var(&x)));
    let p = translate(vec![main, twice, add()], "main");
    assert!(p.is_pure());
    assert_eq!(run(&p, t(2)), t(8));
    assert_eq!(run(&p, t(0)), t(100));
}

#[test]
pub fn test_macro_cycle_rejected() {
    let x = n("a", "X");
    let bx = n("b", "X");
    let set = ProgramSet::from_programs(vec![
        program("a", asugar::macro_call(&x, "b", var(&x))),
        program("b", asugar::macro_call(&bx, "a", var(&bx))),
    ])
    .unwrap();
    assert!(matches!(
        set.translate("a"),
        Err(WhileError::Macro(MacroError::Cycle(_)))
    ));
}

#[test]
pub fn test_missing_macro_rejected() {
    let x = n("a", "X");
    let set =
        ProgramSet::from_programs(vec![program("a", asugar::macro_call(&x, "gone", var(&x)))])
            .unwrap();
    assert!(matches!(
        set.translate("a"),
        Err(WhileError::Macro(MacroError::UnknownProgram(f))) if f == "gone"
    ));
}
