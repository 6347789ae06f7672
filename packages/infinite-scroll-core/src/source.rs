use crate::{ContainerRef, ScrollError, ScrollHost, ScrollResult, ScrollerOptions};

/// What a scroller listens to and measures.
#[derive(Clone, Debug, PartialEq)]
pub enum ScrollSource<E> {
    /// The global viewport.
    Window,
    /// A specific scrolling element.
    Container(E),
}

impl<E> ScrollSource<E> {
    pub fn is_window(&self) -> bool {
        matches!(self, ScrollSource::Window)
    }

    pub fn as_container(&self) -> Option<&E> {
        match self {
            ScrollSource::Window => None,
            ScrollSource::Container(element) => Some(element),
        }
    }
}

impl<E: Clone> ScrollSource<E> {
    /// Resolve the source described by `options`.
    ///
    /// In order of precedence:
    /// 1. an explicit container, either an element or a selector,
    /// 2. the window when `scroll_window` is set,
    /// 3. with `from_root`, the nearest scrolling ancestor of the host element (the window if
    ///    none scrolls),
    /// 4. the host element itself.
    pub fn resolve<H>(host: &H, options: &ScrollerOptions<E>) -> ScrollResult<Self>
    where
        H: ScrollHost<Element = E> + ?Sized,
    {
        match &options.scroll_container {
            Some(ContainerRef::Element(element)) => {
                return Ok(ScrollSource::Container(element.clone()));
            }
            Some(ContainerRef::Selector(selector)) => {
                let root = match options.from_root {
                    true => None,
                    false => options.element.as_ref(),
                };
                return host
                    .query_selector(selector, root)
                    .map(ScrollSource::Container)
                    .ok_or_else(|| ScrollError::ContainerNotFound {
                        selector: selector.clone(),
                    });
            }
            None => {}
        }

        if options.scroll_window {
            return Ok(ScrollSource::Window);
        }

        let element = options.element.as_ref().ok_or(ScrollError::MissingElement)?;

        if options.from_root {
            return Ok(host
                .scrollable_ancestor(element, options.axis())
                .map(ScrollSource::Container)
                .unwrap_or(ScrollSource::Window));
        }

        Ok(ScrollSource::Container(element.clone()))
    }
}
