//! JavaScript questions

use super::{Difficulty, Question};

pub(super) fn questions() -> Vec<Question> {
    vec![
        Question::new(
            "What is the output and why?\n```javascript\nconsole.log(typeof typeof 1);\n```",
            &["\"number\"", "\"string\"", "\"undefined\"", "\"object\""],
            1,
            "typeof operator and type coercion",
            "`typeof 1` returns \"number\", then `typeof \"number\"` returns \"string\" because typeof always returns a string.",
            Difficulty::Intermediate,
        ),
        Question::new(
            "What will happen?\n```javascript\nPromise.race([Promise.resolve(1), Promise.reject(2), Promise.resolve(3)])\n  .then(console.log)\n  .catch(console.error);\n```",
            &["Logs 1", "Logs 2", "Logs 3", "Throws an error"],
            0,
            "Promise.race",
            "Promise.race settles with the first promise to settle, whether fulfilled or rejected. Here `Promise.resolve(1)` settles first.",
            Difficulty::Advanced,
        ),
        Question::new(
            "What is the value of x?\n```javascript\nlet x = 5;\n(() => {\n  let x = 10;\n})();\nconsole.log(x);\n```",
            &["5", "10", "undefined", "ReferenceError"],
            0,
            "scope and closures",
            "The `x` inside the IIFE is a different variable because `let` is block scoped. The outer `x` remains 5.",
            Difficulty::Intermediate,
        ),
        Question::new(
            "What is logged?\n```javascript\nconst obj = { a: 1 };\nObject.defineProperty(obj, \"b\", { value: 2, enumerable: false });\nconsole.log(Object.keys(obj));\n```",
            &["[\"a\", \"b\"]", "[\"a\"]", "[\"b\"]", "TypeError"],
            1,
            "Object property descriptors",
            "`Object.keys` only returns enumerable own properties. Property \"b\" is non-enumerable, so only \"a\" is returned.",
            Difficulty::Advanced,
        ),
        Question::new(
            "What is the output?\n```javascript\nconst arr = [1, 2, 3];\narr[100] = 4;\nconsole.log(arr.length);\n```",
            &["3", "4", "100", "101"],
            3,
            "array length property",
            "An array's length is always one more than its highest index. Setting index 100 makes the length 101.",
            Difficulty::Intermediate,
        ),
        Question::new(
            "What happens?\n```javascript\nclass A extends null {\n  constructor() { super(); }\n}\nnew A();\n```",
            &["Creates instance of A", "TypeError", "ReferenceError", "SyntaxError"],
            1,
            "class inheritance",
            "You can extend null, but calling `super()` throws a TypeError because null has no constructor.",
            Difficulty::Advanced,
        ),
        Question::new(
            "What is logged?\n```javascript\nconsole.log(1 + \"2\" + \"2\");\n```",
            &["\"122\"", "\"14\"", "122", "14"],
            0,
            "type coercion",
            "With a string operand the `+` operator concatenates, so `1 + \"2\"` is \"12\" and appending \"2\" gives \"122\".",
            Difficulty::Beginner,
        ),
        Question::new(
            "What is the result?\n```javascript\nconst sym1 = Symbol(\"foo\");\nconst sym2 = Symbol(\"foo\");\nconsole.log(sym1 === sym2);\n```",
            &["true", "false", "TypeError", "SyntaxError"],
            1,
            "Symbols",
            "Every `Symbol()` call creates a new unique symbol, even with the same description.",
            Difficulty::Intermediate,
        ),
        Question::new(
            "What is logged?\n```javascript\nconst proto = { value: 42 };\nconst obj = Object.create(proto);\nobj.value = undefined;\nconsole.log(\"value\" in obj);\n```",
            &["true", "false", "undefined", "TypeError"],
            0,
            "prototypal inheritance",
            "The `in` operator checks both own and inherited properties, regardless of their value.",
            Difficulty::Advanced,
        ),
        Question::new(
            "What is the output?\n```javascript\nfunction* gen() {\n  yield 1;\n  yield* [2, 3];\n  yield 4;\n}\nconsole.log([...gen()]);\n```",
            &["[1, 2, 3, 4]", "[1, [2, 3], 4]", "[1, undefined, 4]", "TypeError"],
            0,
            "generators",
            "`yield*` delegates to another iterable. The spread collects every yielded value in order.",
            Difficulty::Advanced,
        ),
    ]
}
