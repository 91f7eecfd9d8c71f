//! Composite reducer built from named sub-reducers.

/// Declares a root state made of independently reduced slices, and the
/// reducer that routes every action to every slice.
///
/// ```ignore
/// combine_reducers! {
///     #[derive(serde::Serialize)]
///     pub struct AppState => AppReducer: AppAction {
///         counter: CounterReducer,
///         log: LogReducer,
///     }
/// }
/// ```
///
/// Each field holds `Arc<Sub::State>`. When every sub-reducer hands back the
/// `Arc` it was given, the root reducer returns the incoming root `Arc` too.
/// Every sub-reducer must share the root's action type.
#[macro_export]
macro_rules! combine_reducers {
    (
        $(#[$meta:meta])*
        $vis:vis struct $state:ident => $reducer:ident : $action:ty {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $sub:ty
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $state {
            $(
                $(#[$fmeta])*
                pub $field: ::std::sync::Arc<<$sub as $crate::mvi::Reducer>::State>,
            )+
        }

        impl $crate::mvi::SliceState for $state {}

        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $reducer;

        impl $crate::mvi::Reducer for $reducer {
            type State = $state;
            type Action = $action;

            fn reduce(
                state: ::std::sync::Arc<$state>,
                action: &$action,
            ) -> ::std::sync::Arc<$state> {
                $(
                    let $field = <$sub as $crate::mvi::Reducer>::reduce(
                        ::std::sync::Arc::clone(&state.$field),
                        action,
                    );
                )+
                let unchanged = true $(&& ::std::sync::Arc::ptr_eq(&$field, &state.$field))+;
                if unchanged {
                    return state;
                }
                ::std::sync::Arc::new($state { $($field,)+ })
            }
        }
    };
}
