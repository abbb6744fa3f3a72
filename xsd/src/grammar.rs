// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parsers for the `date` and `dateTime` lexical spaces of XML Schema 1.1
//! Part 2, Sections 3.3.7 and 3.3.9.

use std::borrow::Cow;

use chumsky::Parser;
use chumsky::error::RichPattern;
use chumsky::extra::ParserExtra;
use chumsky::label::LabelError;
use chumsky::prelude::*;

use crate::value::{XsdDate, XsdDateTime, XsdOffset, XsdTime};

/// Failure reasons when a specific value was expected but not found.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValueExpected {
    /// A digit within the given range
    Digit { min: char, max: char },
    /// Year fragment
    Year,
    /// Month fragment, 01-12
    Month,
    /// Day fragment, 01-31
    Day,
    /// Hour fragment, 00-24
    Hour,
    /// Minute fragment, 00-59
    Minute,
    /// Second fragment, 00-59
    Second,
    /// `Z` or a numeric offset
    Offset,
    /// Bracketed IANA zone identifier
    Zone,
    /// The day does not exist in the given month and year
    Date,
    /// Years with more than four digits must not start with zero
    YearLeadingZero,
    /// Year outside -9999..=9999
    YearRange,
    /// Hour 24 is only valid as `24:00:00`
    EndOfDay,
    /// More than nanosecond precision
    Fraction,
}

impl From<ValueExpected> for RichPattern<'_, char> {
    fn from(expected: ValueExpected) -> Self {
        match expected {
            ValueExpected::Digit { min: '0', max: '9' } => Self::Label(Cow::Borrowed("digit")),
            ValueExpected::Digit { min, max } => Self::Label(Cow::Owned(format!("digit {min}-{max}"))),
            ValueExpected::Year => Self::Label(Cow::Borrowed("year")),
            ValueExpected::Month => Self::Label(Cow::Borrowed("month")),
            ValueExpected::Day => Self::Label(Cow::Borrowed("day")),
            ValueExpected::Hour => Self::Label(Cow::Borrowed("hour")),
            ValueExpected::Minute => Self::Label(Cow::Borrowed("minute")),
            ValueExpected::Second => Self::Label(Cow::Borrowed("second")),
            ValueExpected::Offset => Self::Label(Cow::Borrowed("offset")),
            ValueExpected::Zone => Self::Label(Cow::Borrowed("zone identifier")),
            ValueExpected::Date => Self::Label(Cow::Borrowed("existing calendar day")),
            ValueExpected::YearLeadingZero => {
                Self::Label(Cow::Borrowed("no leading zero in a year beyond four digits"))
            }
            ValueExpected::YearRange => Self::Label(Cow::Borrowed("year within -9999..=9999")),
            ValueExpected::EndOfDay => Self::Label(Cow::Borrowed("24:00:00 as end of day")),
            ValueExpected::Fraction => {
                Self::Label(Cow::Borrowed("at most nine significant fraction digits"))
            }
        }
    }
}

/// Format Definition:
///
/// ```txt
/// dateLexicalRep = yearFrag '-' monthFrag '-' dayFrag
///
/// yearFrag  = '-'? (([1-9] digit digit digit+) | ('0' digit digit digit))
/// monthFrag = ('0' [1-9]) | ('1' [0-2])
/// dayFrag   = ('0' [1-9]) | ([12] digit) | ('3' [01])
/// ```
///
/// The day is checked against the length of the month, leap years included.
pub(crate) fn value_date<'src, I, E>() -> impl Parser<'src, I, XsdDate, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    let month = choice((
        just('0').ignore_then(i8_1_9()),
        just('1').ignore_then(i8_0_2()).map(|b| 10 + b),
    ))
    .labelled(ValueExpected::Month)
    .as_context();

    let day = choice((
        just('0').ignore_then(i8_1_9()),
        i8_1_2().then(i8_0_9()).map(|(a, b)| 10 * a + b),
        just('3').ignore_then(i8_0_1()).map(|b| 30 + b),
    ))
    .labelled(ValueExpected::Day)
    .as_context();

    year()
        .then_ignore(just('-'))
        .then(month)
        .then_ignore(just('-'))
        .then(day)
        .try_map(|((year, month), day), span| {
            if day > days_in_month(year, month) {
                Err(E::Error::expected_found([ValueExpected::Date], None, span))
            } else {
                Ok(XsdDate { year, month, day })
            }
        })
}

/// Format Definition:
///
/// ```txt
/// dateTimeLexicalRep = yearFrag '-' monthFrag '-' dayFrag 'T'
///                      ((hourFrag ':' minuteFrag ':' secondFrag) | endOfDayFrag)
///                      timezoneFrag zoneAnnotation?
///
/// zoneAnnotation = '[' [A-Za-z0-9/_+-]+ ']'
/// ```
///
/// Unlike XSD, the time zone is mandatory: a date-time without an offset
/// does not denote an instant. The bracketed zone identifier follows the
/// RFC 9557 suffix convention.
pub(crate) fn value_date_time<'src, I, E>() -> impl Parser<'src, I, XsdDateTime, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    value_date()
        .then_ignore(just('T'))
        .then(value_time())
        .then(value_offset())
        .then(zone_annotation().or_not())
        .map(|(((date, time), offset), zone)| XsdDateTime {
            date,
            time,
            offset,
            zone,
        })
}

/// Format Definition:
///
/// ```txt
/// hourFrag     = ([01] digit) | ('2' [0-3])
/// minuteFrag   = [0-5] digit
/// secondFrag   = ([0-5] digit) ('.' digit+)?
/// endOfDayFrag = '24:00:00' ('.' '0'+)?
/// ```
fn value_time<'src, I, E>() -> impl Parser<'src, I, XsdTime, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    time_hour()
        .labelled(ValueExpected::Hour)
        .as_context()
        .then_ignore(just(':'))
        .then(time_minute().labelled(ValueExpected::Minute).as_context())
        .then_ignore(just(':'))
        .then(time_minute().labelled(ValueExpected::Second).as_context())
        .then(fraction().or_not())
        .try_map(|(((hour, minute), second), nanosecond), span| {
            let nanosecond = nanosecond.unwrap_or(0);
            if hour == 24 && (minute, second, nanosecond) != (0, 0, 0) {
                Err(E::Error::expected_found([ValueExpected::EndOfDay], None, span))
            } else {
                Ok(XsdTime {
                    hour,
                    minute,
                    second,
                    nanosecond,
                })
            }
        })
}

/// Format Definition:
///
/// ```txt
/// timezoneFrag = 'Z' | ('+' | '-') offsetHour ':' minuteFrag (':' secondFrag)?
/// offsetHour   = ([01] digit) | ('2' [0-5])
/// ```
///
/// Unlike XSD, which stops at 14:00, every offset `jiff` can represent is
/// accepted, up to 25:59:59.
fn value_offset<'src, I, E>() -> impl Parser<'src, I, XsdOffset, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    let hour = choice((
        u8_0_1().then(u8_0_9()).map(|(a, b)| 10 * a + b),
        just('2').ignore_then(u8_0_5()).map(|b| 20 + b),
    ));

    let fixed = select! { c @ ('+' | '-') => c }
        .then(hour)
        .then_ignore(just(':'))
        .then(time_minute())
        .then(just(':').ignore_then(time_minute()).or_not())
        .map(|(((sign, hour), minute), second)| XsdOffset::Fixed {
            positive: !matches!(sign, '-'),
            hour,
            minute,
            second,
        });

    choice((just('Z').to(XsdOffset::Utc), fixed))
        .labelled(ValueExpected::Offset)
        .as_context()
}

fn zone_annotation<'src, I, E>() -> impl Parser<'src, I, String, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    select! { c @ ('A'..='Z' | 'a'..='z' | '0'..='9' | '/' | '_' | '-' | '+') => c }
        .repeated()
        .at_least(1)
        .collect::<String>()
        .labelled(ValueExpected::Zone)
        .delimited_by(just('['), just(']'))
}

fn year<'src, I, E>() -> impl Parser<'src, I, i16, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    just('-')
        .or_not()
        .then(u8_0_9().repeated().at_least(4).collect::<Vec<_>>())
        .labelled(ValueExpected::Year)
        .as_context()
        .try_map(|(sign, digits), span| {
            if digits.len() > 4 {
                let reason = if digits.first() == Some(&0) {
                    ValueExpected::YearLeadingZero
                } else {
                    ValueExpected::YearRange
                };
                return Err(E::Error::expected_found([reason], None, span));
            }

            let year = digits
                .into_iter()
                .fold(0, |acc, d| 10 * acc + i16::from(d));
            Ok(if sign.is_some() { -year } else { year })
        })
}

fn fraction<'src, I, E>() -> impl Parser<'src, I, u32, E>
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    just('.')
        .ignore_then(u8_0_9().repeated().at_least(1).collect::<Vec<_>>())
        .try_map(|digits, span| {
            // trailing zeros past nanoseconds carry no precision
            if digits.iter().skip(9).any(|&d| d != 0) {
                return Err(E::Error::expected_found([ValueExpected::Fraction], None, span));
            }

            Ok(digits
                .into_iter()
                .chain(std::iter::repeat(0))
                .take(9)
                .fold(0, |acc, d| 10 * acc + u32::from(d)))
        })
}

fn time_hour<'src, I, E>() -> impl Parser<'src, I, u8, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    choice((
        u8_0_1().then(u8_0_9()).map(|(a, b)| 10 * a + b),
        just('2').ignore_then(u8_0_4()).map(|b| 20 + b),
    ))
}

fn time_minute<'src, I, E>() -> impl Parser<'src, I, u8, E> + Copy
where
    I: Input<'src, Token = char, Span = SimpleSpan>,
    E: ParserExtra<'src, I>,
    E::Error: LabelError<'src, I, ValueExpected>,
{
    u8_0_5().then(u8_0_9()).map(|(a, b)| 10 * a + b)
}

const fn is_leap_year(year: i16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

const fn days_in_month(year: i16, month: i8) -> i8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

macro_rules! define_digit_select {
    ($fname:ident : $ty:ty => $min:literal ..= $max:literal) => {
        #[allow(
            trivial_numeric_casts,
            clippy::cast_lossless,
            clippy::cast_possible_truncation,
            clippy::cast_possible_wrap
        )]
        fn $fname<'src, I, E>() -> impl Parser<'src, I, $ty, E> + Copy
        where
            I: Input<'src, Token = char, Span = SimpleSpan>,
            E: ParserExtra<'src, I>,
            E::Error: LabelError<'src, I, ValueExpected>,
        {
            select! { c @ $min..=$max => ((c as u8 - b'0') as $ty) }
                .labelled(ValueExpected::Digit { min: $min, max: $max })
        }
    };
}

define_digit_select!(u8_0_1 : u8 => '0'..='1');
define_digit_select!(u8_0_4 : u8 => '0'..='4');
define_digit_select!(u8_0_5 : u8 => '0'..='5');
define_digit_select!(u8_0_9 : u8 => '0'..='9');
define_digit_select!(i8_0_1 : i8 => '0'..='1');
define_digit_select!(i8_0_2 : i8 => '0'..='2');
define_digit_select!(i8_0_9 : i8 => '0'..='9');
define_digit_select!(i8_1_2 : i8 => '1'..='2');
define_digit_select!(i8_1_9 : i8 => '1'..='9');
