//! React questions

use super::{Difficulty, Question};

pub(super) fn questions() -> Vec<Question> {
    vec![
        Question::new(
            "What happens when setState is called multiple times in an event handler?",
            &[
                "Each setState causes an immediate re-render",
                "React batches the updates and performs a single re-render",
                "Only the last setState is processed",
                "It throws an error",
            ],
            1,
            "setState batching",
            "React batches multiple state updates from the same event and processes them in a single re-render.",
            Difficulty::Intermediate,
        ),
        Question::new(
            "What is the correct way to pass a method to a child component?",
            &[
                "<Child onClick={this.handleClick()} />",
                "<Child onClick={this.handleClick} />",
                "<Child onClick={() => this.handleClick()} />",
                "Both B and C are correct",
            ],
            3,
            "event handling and props",
            "Passing the method reference and wrapping it in an arrow function both work. The first option calls the method during render instead.",
            Difficulty::Beginner,
        ),
        Question::new(
            "What happens in this code?\n```jsx\nfunction App() {\n  const [count, setCount] = useState(0);\n  useEffect(() => {\n    setCount(count + 1);\n  }, []);\n  return <div>{count}</div>;\n}\n```",
            &[
                "Infinite re-renders",
                "Renders once with count as 1",
                "Renders twice with count as 1",
                "Throws an error",
            ],
            2,
            "useEffect and strict mode",
            "The first render shows 0, the effect sets the count to 1 and React renders again. In strict mode effects also run twice in development.",
            Difficulty::Advanced,
        ),
        Question::new(
            "What is the purpose of the key prop in lists?",
            &[
                "It's required syntax for lists",
                "It helps React track which items have changed",
                "It improves rendering performance",
            ],
            1,
            "list rendering and reconciliation",
            "Keys let React identify which items were changed, added or removed between renders.",
            Difficulty::Intermediate,
        ),
        Question::new(
            "What happens when you call setState with a function?",
            &[
                "It always causes a re-render",
                "It guarantees access to the latest state",
                "It's slower than passing an object",
                "It's only needed for complex state updates",
            ],
            1,
            "setState with function updates",
            "An updater function receives the latest pending state, which matters when several updates are queued.",
            Difficulty::Intermediate,
        ),
        Question::new(
            "What is the difference between useMemo and useCallback?",
            &[
                "useMemo is for values, useCallback is for functions",
                "useCallback is more performant",
                "useMemo can only be used with primitives",
                "They are interchangeable",
            ],
            0,
            "memoization hooks",
            "`useMemo` memoizes a computed value while `useCallback` memoizes a function identity.",
            Difficulty::Advanced,
        ),
        Question::new(
            "What happens in this code?\n```jsx\nfunction App() {\n  const [state, setState] = useState({ count: 0, name: \"app\" });\n  return (\n    <button onClick={() => setState({ count: state.count + 1 })}>\n      {state.count}\n    </button>\n  );\n}\n```",
            &[
                "Works as expected",
                "Loses other state properties",
                "Causes infinite re-renders",
                "Throws an error",
            ],
            1,
            "state updates with objects",
            "Unlike class components, the hook setter replaces the object instead of merging it. Spread the previous state to keep other fields.",
            Difficulty::Intermediate,
        ),
        Question::new(
            "What is the purpose of useLayoutEffect?",
            &[
                "It's the same as useEffect",
                "It runs before browser paint",
                "It's only for CSS updates",
                "It's deprecated",
            ],
            1,
            "useLayoutEffect",
            "`useLayoutEffect` runs synchronously after DOM mutations and before the browser paints, which suits DOM measurements.",
            Difficulty::Advanced,
        ),
        Question::new(
            "What is the correct way to fetch data with hooks?",
            &[
                "Use useState in useEffect",
                "Use useEffect with cleanup",
                "Use async/await directly in useEffect",
                "Both A and B are correct",
            ],
            3,
            "data fetching with hooks",
            "Store the data with `useState`, fetch inside `useEffect`, and use the cleanup to ignore results after unmount.",
            Difficulty::Intermediate,
        ),
        Question::new(
            "What is the purpose of React.memo?",
            &[
                "Memoizes component render output",
                "Caches component props",
                "Prevents unnecessary re-renders",
                "All of the above",
            ],
            2,
            "component memoization",
            "`React.memo` skips re-rendering a component when its props are shallowly equal to the previous ones.",
            Difficulty::Advanced,
        ),
    ]
}
