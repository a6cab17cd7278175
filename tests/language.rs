use std::fs;

use brolang::execute;

fn assert_output(src: &str, expected: &str) {
    let result = execute(src);
    assert!(result.error.is_none(),
            "Script failed: {:?}\nSource: {src}",
            result.error);
    assert_eq!(result.output, expected, "Wrong output for: {src}");
}

fn assert_error(src: &str, needle: &str) {
    let result = execute(src);
    let error = result.error
                      .unwrap_or_else(|| panic!("Script succeeded but was expected to fail: {src}"));
    assert!(error.contains(needle),
            "Error {error:?} does not mention {needle:?}");
}

#[test]
fn integer_literals_print_with_a_newline() {
    assert_output("bol_bhai(5);", "5\n");
    assert_output("bol_bhai(0);", "0\n");
    assert_output("bol_bhai(123456789);", "123456789\n");
}

#[test]
fn strings_and_booleans_print_their_renderings() {
    assert_output("bol_bhai(\"namaste\");", "namaste\n");
    assert_output("bol_bhai(sach);", "true\n");
    assert_output("bol_bhai(jhuth);", "false\n");
}

#[test]
fn arithmetic_folds_left_to_right_without_precedence() {
    // The grammar folds every operator against the running left operand in
    // encounter order, so multiplication does not bind tighter.
    assert_output("bol_bhai(2 + 3 * 4);", "20\n");
    assert_output("bol_bhai(10 - 2 - 3);", "5\n");
    assert_output("bol_bhai(2 * 3 + 4);", "10\n");
    assert_output("bol_bhai(8 / 2 * 3);", "12\n");
    assert_output("bol_bhai(7 % 4 + 1);", "4\n");
}

#[test]
fn division_and_modulo_by_zero_are_errors() {
    assert_error("bol_bhai(1 / 0);", "Division by zero");
    assert_error("bol_bhai(1 % 0);", "Division by zero");
}

#[test]
fn operators_reject_non_integer_operands() {
    assert_error("bol_bhai(1 + sach);", "INTEGER + BOOLEAN");
    assert_error("bol_bhai(\"a\" + \"b\");", "STRING + STRING");
    assert_error("agar(\"x\" < 2) { bol_bhai(1); }", "STRING < INTEGER");
}

#[test]
fn let_binds_and_reads_back() {
    assert_output("bhai_sun x = 5; bol_bhai(x);", "5\n");
    assert_output("bhai_sun x = 2 + 3; bhai_sun y = x; bol_bhai(y);", "5\n");
}

#[test]
fn undefined_identifier_read_is_an_error_naming_it() {
    assert_error("bol_bhai(yaar);", "identifier not found: yaar");
}

#[test]
fn let_in_a_block_shadows_and_disappears_after_it() {
    assert_output("bhai_sun x = 1; agar(sach) { bhai_sun x = 2; bol_bhai(x); } bol_bhai(x);",
                  "2\n1\n");
}

#[test]
fn assignment_mutates_the_nearest_enclosing_binding() {
    assert_output("bhai_sun x = 1; agar(sach) { x = 2; } bol_bhai(x);", "2\n");
}

#[test]
fn assignment_to_an_unbound_name_creates_it_in_the_current_scope() {
    assert_output("agar(sach) { y = 5; bol_bhai(y); }", "5\n");
    // The created binding belongs to the block scope and ends with it.
    assert_error("agar(sach) { y = 5; } bol_bhai(y);", "identifier not found: y");
}

#[test]
fn if_branches_are_tried_in_order_and_first_match_wins() {
    let src = "bhai_sun x = 5; \
               agar(x < 3) { bol_bhai(1); } \
               nahi_to_agar(x < 10) { bol_bhai(2); } \
               nahi_to_agar(x < 100) { bol_bhai(3); } \
               nahi_to { bol_bhai(4); }";
    assert_output(src, "2\n");

    assert_output("agar(jhuth) { bol_bhai(1); } nahi_to { bol_bhai(2); }", "2\n");
    assert_output("agar(jhuth) { bol_bhai(1); }", "");
}

#[test]
fn truthiness_follows_the_value_type() {
    assert_output("agar(0) { bol_bhai(1); } nahi_to { bol_bhai(2); }", "2\n");
    assert_output("agar(7) { bol_bhai(1); }", "1\n");
    assert_output("agar(\"x\") { bol_bhai(1); }", "1\n");
}

#[test]
fn if_is_an_expression_yielding_its_block_value() {
    assert_output("bhai_sun x = agar(sach) { 42 }; bol_bhai(x);", "42\n");
    assert_output("bhai_sun x = agar(jhuth) { 42 }; bol_bhai(x);", "null\n");
}

#[test]
fn while_loops_re_test_the_condition_each_iteration() {
    assert_output("bhai_sun x = 3; jaha_tak(x > 0) { bol_bhai(x); x = x - 1; }",
                  "3\n2\n1\n");
}

#[test]
fn for_loops_run_init_condition_and_update() {
    assert_output("chal_bhai(bhai_sun i = 0; i < 5; i = i + 1) { bol_bhai(i); }",
                  "0\n1\n2\n3\n4\n");
}

#[test]
fn for_clauses_may_be_omitted() {
    assert_output("bhai_sun i = 0; chal_bhai(; i < 3;) { bol_bhai(i); i = i + 1; }",
                  "0\n1\n2\n");
}

#[test]
fn break_stops_the_loop_before_later_iterations_print() {
    assert_output("bhai_sun x = 0; \
                   jaha_tak(sach) { x = x + 1; agar(x == 3) { bas_kar; } bol_bhai(x); }",
                  "1\n2\n");
}

#[test]
fn break_only_ends_the_innermost_loop() {
    let src = "chal_bhai(bhai_sun i = 0; i < 2; i = i + 1) { \
                   chal_bhai(bhai_sun j = 0; j < 5; j = j + 1) { \
                       agar(j == 1) { bas_kar; } \
                       bol_bhai(j); \
                   } \
                   bol_bhai(i); \
               }";
    assert_output(src, "0\n0\n0\n1\n");
}

#[test]
fn continue_skips_the_body_but_still_runs_the_update() {
    assert_output("chal_bhai(bhai_sun i = 0; i < 5; i = i + 1) { \
                       agar(i % 2 == 1) { aage_badh; } \
                       bol_bhai(i); \
                   }",
                  "0\n2\n4\n");
}

#[test]
fn break_outside_a_loop_is_a_silent_no_op() {
    assert_output("bas_kar; bol_bhai(1);", "1\n");
    assert_output("aage_badh; bol_bhai(2);", "2\n");
}

#[test]
fn runaway_loops_hit_the_iteration_cap() {
    assert_error("jaha_tak(sach) { }", "10000");
    assert_error("chal_bhai(;;) { }", "10000");
}

#[test]
fn a_loop_may_run_exactly_up_to_the_cap() {
    assert_output("bhai_sun i = 0; jaha_tak(i < 10000) { i = i + 1; } bol_bhai(i);",
                  "10000\n");
}

#[test]
fn arrays_index_and_render() {
    assert_output("bhai_sun arr = [1, 2, 3]; bol_bhai(arr[0]); bol_bhai(arr[2]);",
                  "1\n3\n");
    assert_output("bol_bhai([1, 2, 3]);", "[1, 2, 3]\n");
    assert_output("bol_bhai([]);", "[]\n");
    assert_output("bol_bhai([10, 20][1]);", "20\n");
    assert_output("bol_bhai([[1, 2], [3]][1]);", "[3]\n");
    assert_output("bhai_sun arr = [4, 5]; bol_bhai(arr[0] + arr[1]);", "9\n");
}

#[test]
fn out_of_range_indexes_name_the_offending_index() {
    assert_error("bhai_sun arr = [1, 2]; bol_bhai(arr[5]);", "Index 5");
    assert_error("bhai_sun arr = [1, 2]; bol_bhai(arr[0 - 1]);", "Index -1");
}

#[test]
fn indexing_rejects_wrong_types() {
    assert_error("bhai_sun arr = [1]; bol_bhai(arr[sach]);", "BOOLEAN");
    assert_error("bhai_sun x = 5; bol_bhai(x[0]);", "index operator not supported: INTEGER");
}

#[test]
fn arrays_must_be_homogeneous() {
    assert_error("bhai_sun arr = [1, 2, \"x\"];", "expected INTEGER, found STRING");
}

#[test]
fn unknown_functions_are_reported_by_name() {
    assert_error("kuchbhi(1);", "unknown function: kuchbhi");
}

#[test]
fn print_calls_in_expression_position_print_each_argument() {
    assert_output("bhai_sun x = bol_bhai(1, 2); bol_bhai(x);", "1\n2\nnull\n");
    assert_output("bhai_sun x = bol_bhai(); bol_bhai(x);", "null\n");
}

#[test]
fn pure_reads_render_identically_every_time() {
    assert_output("bhai_sun a = [1, 2]; bol_bhai(a); bol_bhai(a);",
                  "[1, 2]\n[1, 2]\n");
}

#[test]
fn parse_errors_block_evaluation_entirely() {
    let result = execute("bhai_sun = 5; bol_bhai(1);");
    assert!(result.error.is_some());
    assert_eq!(result.output, "", "Nothing may run when parsing failed");
}

#[test]
fn independent_parse_errors_are_all_collected() {
    let result = execute("bhai_sun = 1; bhai_sun = 2;");
    let error = result.error.expect("expected parse errors");
    assert_eq!(error.matches("kaha se aa gaya").count(), 2);
}

#[test]
fn comparisons_are_only_legal_in_condition_position() {
    let result = execute("bol_bhai(1 < 2);");
    assert!(result.error.is_some());
}

#[test]
fn illegal_characters_surface_as_parse_errors() {
    assert_error("bhai_sun x = 5 @ 3;", "@");
}

#[test]
fn runtime_errors_keep_the_output_printed_before_the_failure() {
    let result = execute("bol_bhai(1); bol_bhai(1 / 0);");
    assert_eq!(result.output, "1\n");
    assert!(result.error.is_some());
}

#[test]
fn error_messages_carry_the_source_line() {
    assert_error("bol_bhai(1);\nbol_bhai(oops);", "line 2");
}

#[test]
fn empty_source_produces_empty_output() {
    let result = execute("");
    assert_eq!(result.output, "");
    assert!(result.error.is_none());
}

#[test]
fn example_script_runs_end_to_end() {
    let script = fs::read_to_string("tests/example.bro").expect("missing file");
    assert_output(&script, "30\nbhai\ncode\nlikh\nbada number\n");
}
