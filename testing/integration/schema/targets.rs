// Declarations read by the build script. This file is never compiled; the
// generated definitions are included by `src/targets.rs`.

use crate::elements::priority;
use crate::elements::{Status, TestElements};

/// Lookup over test elements.
#[enum_class(TestElements)]
#[derive(Debug)]
pub struct TestElementsClass;

#[enum_class(TestElements, with_description)]
#[derive(Debug)]
pub struct DescribedElements;

/// Order status with descriptions and structural equality.
#[enum_class(Status, with_description)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct StatusRecord;

#[enum_class(priority::Priority)]
#[derive(Debug)]
pub(crate) struct PriorityClass;
