use winnow::combinator::separated;
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

fn segment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c != '.')
        .context(StrContext::Expected(StrContextValue::Description(
            "path segment",
        )))
        .parse_next(input)
}

/// `segment ('.' segment)*`
pub(super) fn path(input: &mut &str) -> ModalResult<Vec<String>> {
    let segments: Vec<&str> = separated(1.., segment, '.').parse_next(input)?;
    Ok(segments.into_iter().map(str::to_owned).collect())
}
