/*!
# Keys

Keys are typed by their face or by a word. Words are not case sensitive.
Digits and symbols may be run together, words need a space or a
non-letter between them: `9sqrt` works, `sincos` does not.

| Face | Typed as | Effect |
|------|----------|--------|
| `0`-`9` `.` | same | Add a digit. A second `.` or a second leading `0` is ignored. |
| `AC` | `ac` `c` `clear` | Clear everything. |
| `DEL` | `del` | Remove the last digit, or the whole result after `=`. |
| `=` | `=` | Evaluate the pending operation. |
| `+` `-` | same | Add, subtract. |
| `*` | `*` `x` `×` | Multiply. |
| `÷` | `÷` `/` | Divide. |
| `%` | `%` | Remainder, with the sign of the left operand. |
| `^` | `^` | Power. |
| `√` | `√` `sqrt` | Square root. |
| `!` | `!` `fact` | Factorial of the operand rounded down. Negative is `NaN`. |
| `Sin` `Cos` `Tan` | `sin` `cos` `tan` | Trigonometry in radians. |
| `Rad` | `rad` | Degrees to radians. |
| `Inv` | `inv` | Reciprocal. |
| `In` | `in` `ln` | Natural logarithm. |
| `log` | `log` | Base 10 logarithm. |
| `π` | `π` `pi` | Replace the operand with pi. |
| `e` | `e` | Replace the operand with Euler's number. |
*/
