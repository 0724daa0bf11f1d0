//! Procedural macros for the `puzzle-framework` crate.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Error, Expr, Item, ItemImpl, ItemStruct, Type, parse_macro_input};

/// Procedural macro attribute that generates a `DayRunner` implementation.
///
/// This macro automates the implementation of the `DayRunner` trait for a
/// day's puzzle, routing to the appropriate runner function based on whether
/// a parse step is declared.
///
/// # Properties
///
/// - `title` (required): An expression that evaluates to `&str`, the puzzle's
///   display title. Can be a string literal or a constant.
///
/// - `part_one` (required): The type implementing `Puzzle<PartOne>`.
///
/// - `part_two` (required): The type implementing `Puzzle<PartTwo>`.
///
/// - `parsed` (optional): A type that implements `ParseInput`, used to parse
///   input once before solving both parts. If omitted, the unparsed input
///   string is passed directly to the solvers.
///
/// # Errors
///
/// Returns a compile error if:
/// - Applied to anything other than a struct or impl block
/// - Required properties (`title`, `part_one`, `part_two`) are missing
/// - Any property is specified more than once
/// - An unsupported property is provided
///
/// # Examples
///
/// With a struct `Day01` implementing `Puzzle<PartOne>` and `Puzzle<PartTwo>`
/// over string input:
///
/// ```ignore
/// #[puzzle_runner(title = "Day 1", part_one = Day01, part_two = Day01)]
/// struct Day01Runner;
/// ```
///
/// With a struct `Lists` implementing `ParseInput` and a day-selector struct
/// `Advent2024<const DAY: u8>` to attach runners to:
///
/// ```ignore
/// #[puzzle_runner(title = "Day 1", parsed = Lists, part_one = Day01, part_two = Day01)]
/// impl Advent2024<1> {}
/// ```
#[proc_macro_attribute]
pub fn puzzle_runner(args: TokenStream, input: TokenStream) -> TokenStream {
    // The expression to use as the puzzle title; should resolve to string slice
    let mut title_expr_opt: Option<Expr> = None;
    // The type to use for a `ParseInput` generic parameter
    let mut parsed_ty_opt: Option<Type> = None;
    // The type to use for a `Puzzle<PartOne>` generic parameter
    let mut part_one_ty_opt: Option<Type> = None;
    // The type to use for a `Puzzle<PartTwo>` generic parameter
    let mut part_two_ty_opt: Option<Type> = None;

    let puzzle_runner_parser = syn::meta::parser(|meta| {
        // check for expected property keys, track value, error if a duplicate key appears
        if meta.path.is_ident("title") {
            if title_expr_opt.is_some() {
                return Err(meta.error("duplicate 'title' property"));
            }
            title_expr_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("parsed") {
            if parsed_ty_opt.is_some() {
                return Err(meta.error("duplicate 'parsed' property"));
            }
            parsed_ty_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("part_one") {
            if part_one_ty_opt.is_some() {
                return Err(meta.error("duplicate 'part_one' property"));
            }
            part_one_ty_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("part_two") {
            if part_two_ty_opt.is_some() {
                return Err(meta.error("duplicate 'part_two' property"));
            }
            part_two_ty_opt = Some(meta.value()?.parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported puzzle runner property"))
        }
    });
    parse_macro_input!(args with puzzle_runner_parser);

    // enforce required properties
    let Some(title_expr) = title_expr_opt else {
        return Error::new(
            proc_macro2::Span::call_site(),
            "missing required property: 'title'",
        )
        .to_compile_error()
        .into();
    };
    let Some(part_one_ty) = part_one_ty_opt else {
        return Error::new(
            proc_macro2::Span::call_site(),
            "missing required property: 'part_one'",
        )
        .to_compile_error()
        .into();
    };
    let Some(part_two_ty) = part_two_ty_opt else {
        return Error::new(
            proc_macro2::Span::call_site(),
            "missing required property: 'part_two'",
        )
        .to_compile_error()
        .into();
    };

    let run_function_call = match parsed_ty_opt {
        None => {
            quote! {
                puzzle_framework::runner::run_puzzle::<#part_one_ty, #part_two_ty>(
                    #title_expr,
                    input,
                    reporter,
                    timed
                )
            }
        }
        Some(parsed_ty) => {
            quote! {
                puzzle_framework::runner::run_parsed_puzzle::<
                    #parsed_ty,
                    #part_one_ty,
                    #part_two_ty
                >(#title_expr, input, reporter, timed)
            }
        }
    };

    let original_input = input.clone(); // clone before macro consumes input
    let item = parse_macro_input!(input as Item);

    let impl_day_runner_block = match item {
        Item::Struct(ItemStruct { ident, .. }) => {
            // extracted struct name through `ident`
            quote! {
                impl puzzle_framework::runner::DayRunner for #ident {
                    fn run(
                        input: &str,
                        reporter: &mut dyn puzzle_framework::runner::RunReporter,
                        timed: bool
                    ) -> puzzle_framework::PuzzleResult<()> {
                        #run_function_call
                    }
                }
            }
        }
        Item::Impl(ItemImpl { self_ty, .. }) => {
            // extracted type from impl block through `self_ty`
            quote! {
                impl puzzle_framework::runner::DayRunner for #self_ty {
                    fn run(
                        input: &str,
                        reporter: &mut dyn puzzle_framework::runner::RunReporter,
                        timed: bool
                    ) -> puzzle_framework::PuzzleResult<()> {
                        #run_function_call
                    }
                }
            }
        }
        _ => {
            return Error::new(
                proc_macro2::Span::call_site(),
                "the #[puzzle_runner] macro can only be applied to a struct or an impl block",
            )
            .to_compile_error()
            .into();
        }
    };

    let input_ts = proc_macro2::TokenStream::from(original_input);
    TokenStream::from(quote! {
        #input_ts
        #impl_day_runner_block
    })
}
